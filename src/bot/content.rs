//! Static reply copy. Everything the bot says verbatim lives here; strings
//! built from user input stay with their handlers.

// --- Registration and navigation ---

pub const REGISTRATION_PROMPT: &str = "Добро пожаловать в бота!\nВыберите, кто вы:";

pub const EMAIL_PROMPT: &str = "Введите вашу зарегистрированную почту:";

pub const EMAIL_NOT_LISTED: &str = "Эта почта не зарегистрирована для выбранной роли.";

pub const NAV_KEYBOARD_HINT: &str =
    "Если у вас возникли проблемы или надо выйти в меню регистрации, воспользуйтесь меню под вводом сообщения";

pub const NOT_REGISTERED: &str = "Вы не зарегистрированы. Пожалуйста, пройдите регистрацию.";

pub const ROLE_UNDEFINED: &str = "Роль пользователя не определена. Обратитесь к администратору.";

pub const PROBLEM_ACK: &str = "Пожалуйста, опишите вашу проблему, и мы постараемся вам помочь.";

pub const FALLBACK: &str = "Я не понимаю ваш запрос. Выберите действие из меню.";

pub const INTERNAL_ERROR: &str = "Произошла ошибка. Попробуйте позже.";

// --- Home menus ---

pub const STUDENT_HOME: &str =
    "Здравствуйте, вы находитесь в меню студента. Выберите нужную для вас информацию.";

pub const TEACHER_HOME: &str =
    "Здравствуйте, вы находитесь в меню преподавателя. Выберите нужную для вас информацию.";

pub const VISITOR_HOME: &str =
    "Вы выбрали режим посетителя. Выберите нужную для вас информацию.";

// --- Submenu intros ---

pub const SCHEDULE_MENU: &str =
    "📅 В нашем боте хранится свежая информация по расписанию.\n\nВыберите нужное расписание:";

pub const INFO_MENU: &str =
    "Здесь хранится информация, дополнительные материалы колледжа. Выберите интересующее вас.";

pub const APPLICANTS_MENU: &str =
    "🎓 **Добро пожаловать в наш колледж!** 🌟\n\n\
    Мы рады пригласить вас стать частью нашей дружной и профессиональной команды. Наш колледж предлагает уникальные возможности для развития и карьеры!\n\n\
    🔍 Выберите интересующую вас информацию, чтобы узнать больше:\n";

pub const SPECIALTIES_MENU: &str =
    "🌟 В нашем колледже представлены 8 уникальных специальностей, каждая из которых откроет перед вами новые горизонты! 🚀\n\n\
    💼 Выберите ту, которая соответствует вашим интересам и амбициям, и начните свой путь к успешной карьере уже сегодня! 🌱\n\n\
    🎓 Станьте частью нашей дружной и профессиональной команды!";

// --- Placeholders for sections without content yet ---

pub const NEWS_PLACEHOLDER: &str = "Здесь будут новости.";

pub const EVENT_CALENDAR_PLACEHOLDER: &str = "Здесь будет информация о календаре событий.";

pub const EXTRA_MATERIAL_PLACEHOLDER: &str = "Здесь будет дополнительный материал.";

// --- Relay captions ---

pub const SCHEDULE_TOMORROW_CAPTION: &str = "Вот ваше расписание на завтра.";

pub const SCHEDULE_TERM_CAPTION: &str = "Вот ваше расписание на семестр.";

pub const SCHEDULE_SECTIONS_CAPTION: &str = "Вот ваше расписание секций.";

pub const ADMISSION_DATES_CAPTION: &str = "Вот информация о сроках.";

// --- Reminder wizard ---

pub const REMINDER_INTRO: &str =
    "Вы вошли в функцию напоминаний. Выберите год для напоминания.";

pub const REMINDER_TIME_INVALID: &str =
    "Некорректный формат времени. Используйте формат HH:MM.";

// --- Static pages ---

pub const ABOUT: &str =
    "🎉 *Гомельскому государственному машиностроительному колледжу – 65 лет!* 🎓\n\n\
    С момента основания в 1955 году колледж прошёл путь становления, став одним из ведущих образовательных учреждений региона. \
    За 65 лет здесь подготовили более 22 тысяч квалифицированных специалистов, которые успешно трудятся на благо Беларуси.\n\n\
    📚 *Наши достижения*:\n\
    • 66 педагогов, включая кандидатов наук, магистров и обладателей высших квалификационных категорий.\n\
    • Награды: грамоты Министерства образования, победы в республиканских и международных конкурсах.\n\
    • Активное участие в научных конференциях и инновационных проектах, включая адаптивные мультимедиа технологии для лиц с нарушением слуха.\n\
    • Уникальный проект *«Театр Тишины»* и студенческая газета *«Муравейник»*.\n\n\
    🌟 *Важные даты*:\n\
    • *1955* – Основание как машиностроительный техникум на базе завода «Гомсельмаш».\n\
    • *1963* – Открытие отделения для глухих и слабослышащих.\n\
    • *2007* – Переименование в Гомельский государственный машиностроительный колледж.\n\n\
    🏆 *Признание*:\n\
    • Лауреат областных и республиканских конкурсов.\n\
    • Занесение на Доску Почета города Гомеля в номинации *«Лучшее учреждение среднего специального образования»*.\n\n\
    🎓 *Специальности*:\n\
    • Программируемые мобильные системы.\n\
    • Предупреждение и ликвидация чрезвычайных ситуаций. И другие!\n\n\
    💡 *Социальное партнёрство*:\n\
    Колледж активно сотрудничает с ведущими предприятиями региона, а его выпускники возвращаются в стены альма-матер уже в качестве педагогов и специалистов.\n\n\
    ✨ *Гордость региона, успех страны!*";

pub const SOCIALS: &str =
    "🎉 **Присоединяйтесь к нашим социальным сетям!**\n\
    Будьте в курсе последних новостей, мероприятий и достижений колледжа!\n\n\
    🌐 **Вот где нас найти:**\n\
    🌐 **Наш сайт:** [uoggmk.by](http://uoggmk.by) — официальный сайт колледжа для подробной информации.\n\
    🔹 [Наш Telegram-канал](https://t.me/ggmk_gomel) — все важные анонсы и обновления.\n\
    📸 [Instagram](https://www.instagram.com/ggmk.gomel/) — яркие фото и жизнь колледжа.\n\
    🎥 [TikTok](https://www.tiktok.com/@ggmk_official) — динамичные видео и интересные тренды.\n\
    💬 [ВКонтакте](https://vk.com/ggmk_club) — общение, события и многое другое.\n\n\
    Подписывайтесь и оставайтесь на связи с нами! ✨";

pub const CONTACTS: &str =
    "📞 **Контакты для связи с нашим колледжем:**\n\n\
    👨‍🏫 **Приёмная директора:**\n\
    📞 8 (0232) 50-12-71\n\n\
    📝 **Приёмная комиссия:**\n\
    📞 8 (0232) 50-12-73\n\n\
    ---\n\n\
    📞 **Телефоны «Горячей линии» государственной комиссии по контролю за ходом вступительных испытаний:**\n\n\
    Работа горячих линий организована с понедельника по пятницу с 9:00 до 13:00 и с 14:00 до 18:00.\n\n\
    **Рабочая группа государственной комиссии (КГГ):**\n\
    📞 8 017 327-66-80\n\
    Режим работы: Пн-Пт с 9:00 до 13:00 и с 14:00 до 18:00\n\n\
    Горячая линия также работает в выходные дни: 23.06 (Вс), 29.06 (Сб), 06.07 (Сб), 20.07 (Сб), 27.07 (Сб)\n\n\
    **Гомельская областная комиссия (КГК Гомельской области):**\n\
    📞 +375 232 23 83 85\n\
    📞 +375 232 23 83 68\n\n\
    **Горячая линия Министерства образования Республики Беларусь (работает только в период приемной кампании):**\n\
    📞 8-017 222-43-12\n\n\
    **Черненький Дмитрий Николаевич** — заместитель начальника отдела дошкольного, общего среднего, специального профессионального образования\n\
    📞 8 232 35 70 18\n\n\
    Мы всегда готовы ответить на все ваши вопросы и помочь! 🌟";

pub const FAQ: &str =
    "*Вопрос:* Предоставляется ли общежитие иногородним учащимся?  \n\
    *Ответ:* Да. Все иногородние учащиеся обеспечиваются общежитием.\n\n\
    ---\n\n\
    *Вопрос:* Какое преимущество дает наличие удостоверения ЧАЭС?  \n\
    *Ответ:* Удостоверение ЧАЭС, как и удостоверение многодетной семьи и другие подобные документы, дает преимущественное право на зачисление при равных сумме баллов (Пункт 29 Правил приема лиц для получения среднего специального образования).\n\n\
    ---\n\n\
    *Вопрос:* Какой у вас проходной балл?  \n\
    *Ответ:* Проходной балл текущего года формируется после завершения приема на конкретную специальность (бюджетной или платной формы обучения).";

pub const COLLEGE_RULES: &str =
    "📜 **Правила внутреннего распорядка колледжа** 📜\n\n\
    👩‍🎓👨‍🎓 **1. Общие положения:**\n\n\
    Соблюдайте правила колледжа, уважайте друг друга и имущество.\n\
    Запрещены курение, алкоголь, наркотики и опасные вещества.\n\n\
    📚 **2. Учебный процесс:**\n\n\
    Посещайте занятия вовремя. Пропуски возможны только по уважительным причинам.\n\
    Выполняйте задания, участвуйте в проектах и мероприятиях.\n\
    На уроках запрещено пользоваться мобильными телефонами без разрешения.\n\n\
    👔 **3. Внешний вид:**\n\n\
    Придерживайтесь делового стиля одежды или установленного дресс-кода.\n\
    Одежда должна быть опрятной и подходящей для учебного процесса.\n\n\
    🏫 **4. Поведение на территории:**\n\n\
    Соблюдайте порядок и тишину.\n\
    Уничтожение имущества или мусор — недопустимо.\n\
    Сообщайте администрации о любых инцидентах.\n\n\
    🔥 **5. Безопасность:**\n\n\
    Следуйте правилам пожарной безопасности и инструкциям при ЧС.\n\
    Используйте личный транспорт только в отведённых местах.\n\n\
    📋 **6. Взаимодействие с администрацией:**\n\n\
    Обращения должны быть вежливыми и конструктивными.\n\
    Конфликтные ситуации решаются через куратора или администрацию.\n\n\
    💻 **7. Использование техники:**\n\n\
    Компьютеры и оборудование используются только с разрешения преподавателя.\n\
    Интернет доступен исключительно для учебных целей.\n\n\
    ⚠️ **8. Санкции за нарушения:**\n\n\
    Замечание, выговор или иные меры в зависимости от серьёзности нарушения.\n\n\
    ✨ **Следуйте правилам, и учёба станет комфортной и успешной!** 🎓";

pub const ADMISSIONS: &str =
    "📍 **Приемная комиссия**\n\n\
    🗓 **График работы:** понедельник – суббота, с 9.00 до 18.00\n\
    🏢 **Адрес колледжа:** г. Гомель, ул. Объездная, 2\n\
    📞 **Телефон:** 50-12-73\n\n\
    📋 **Перечень документов для подачи**\n\
    Абитуриенты подают в приемную комиссию следующие документы:\n\n\
    - Заявление на имя руководителя колледжа по установленной форме;\n\
    - Оригиналы документа об образовании и приложения к нему;\n\
    - Медицинскую справку по форме, установленной Министерством здравоохранения;\n\
    - Документы, подтверждающие право абитуриента на льготы при приеме на обучение;\n\
    - Шесть фотографий размером 3x4 см.\n\n\
    Дополнительно (при необходимости) в приемную комиссию представляются:\n\n\
    - Заключение врачебно-консультационной или медико-реабилитационной экспертной комиссии об отсутствии противопоказаний для обучения по выбранной специальности (для лиц, закончивших учреждения, обеспечивающие получение специального образования, детей-инвалидов в возрасте до 18 лет, инвалидов I, II и III группы);\n\
    - Заключение государственного центра коррекционно-развивающего обучения и реабилитации по рекомендации обучения в учреждениях, обеспечивающих получение специального образования (для лиц с нарушениями зрения, слуха, функций опорно-двигательного аппарата);\n\
    - Паспорт или заменяющий его документ (предъявляется абитуриентом отдельно).\n\n\
    🎓 **Условия поступления:**\n\
    Абитуриенты, поступающие на все специальности на основе общего базового образования, общего среднего образования, на дневную форму получения образования, зачисляются по конкурсу среднего балла документа об образовании.\n\n\
    🏠 **ИНОГОРОДНИМ УЧАЩИМСЯ ПРЕДОСТАВЛЯЕТСЯ ОБЩЕЖИТИЕ**\n\n\
    Адрес колледжа: г. Гомель, ул. Объездная, 2\n\
    Телефон: 50-12-73";

// --- Specialty descriptions ---

pub const SPECIALTY_METALS: &str =
    "🔧 **ПРОИЗВОДСТВО И ПЕРЕРАБОТКА МЕТАЛЛОВ**\n\n\
    📚 **Специальность:**\n\
    5-04-0714-04  «Производство и переработка металлов»\n\n\
    🎓 **Квалификация специалиста:**\n\
    «Техник-технолог»\n\n\
    🛠️ **Квалификация рабочего:**\n\
    - Заливщик металлов – 3-4 разряд\n\
    - Плавильщик металлов и сплавов – 3-4 разряд\n\
    - Контролер в литейном производстве – 3-4 разряд\n\
    - Слесарь-ремонтник – 3-4 разряд\n\
    - Формовщик машинной формовки – 3-4 разряд\n\n\
    🕒 **Продолжительность обучения:**\n\
    Общее базовое образование — 3 года 7 месяцев\n\n\
    🎓 **Форма обучения:**\n\
    Дневная (бюджетная)\n\n\
    💼 **Профессиональная сфера специалиста:**\n\
    Производство готовых металлических изделий, кроме машин и оборудования.\n\n\
    🔧 **Объектами профессиональной деятельности специалиста являются:**\n\
    - Технологическое оборудование, технологическая оснастка и комплектующие\n\
    - Элементы для технологического оборудования и производства, средства автоматизации\n\
    - Производственный и технологический процесс\n\
    - Обрабатываемые материалы\n\
    - Нормативные правовые акты (НПА) и технические нормативные правовые акты (ТНПА), регламентирующие профессиональную деятельность, и технологическая документация";

pub const SPECIALTY_EMERGENCY: &str =
    "🔥 **ПРЕДУПРЕЖДЕНИЕ И ЛИКВИДАЦИЯ ЧРЕЗВЫЧАЙНЫХ СИТУАЦИЙ**\n\n\
    📚 **Специальность:**\n\
    5-04-1033-01 «Предупреждение и ликвидация чрезвычайных ситуаций»\n\n\
    🎓 **Квалификация специалиста:**\n\
    «Техник»\n\n\
    🛠️ **Квалификация рабочего:**\n\
    Спасатель-пожарный – 7 разряд\n\n\
    🕒 **Продолжительность обучения:**\n\
    На основе общего среднего образования — 2 года 7 месяцев\n\n\
    🎓 **Форма обучения:**\n\
    Дневная (бюджетная и платная)\n\n\
    💼 **Подразделения для работы специалистов:**\n\
    - Подразделения городских и районных отделов по ЧС;\n\
    - Подразделения специального назначения Министерства по чрезвычайным ситуациям (МЧС);\n\
    - Аварийно-спасательные, аварийно-восстановительные подразделения других республиканских органов государственного управления, объединений (учреждений), подчиненных правительству Республики Беларусь.";

pub const SPECIALTY_MOBILE_PROGRAMMING: &str =
    "📱 **ПРОГРАММИРОВАНИЕ МОБИЛЬНЫХ УСТРОЙСТВ**\n\n\
    📚 **Специальность:**\n\
    5-04-0611-01 «Программирование мобильных устройств»\n\n\
    🎓 **Квалификация:**\n\
    Техник-программист\n\n\
    🕒 **Срок получения образования:**\n\
    На основе общего базового образования – 3 года 10 месяцев\n\n\
    🎓 **Форма получения образования:**\n\
    Дневная\n\n\
    🛠️ **Квалификация рабочего:**\n\
    Оператор электронных вычислительных машин (персональных ЭВМ), 5-й разряд\n\n\
    💼 **Основные виды (подвидами) профессиональной деятельности специалиста:**\n\
    - Деятельность в области проводной связи;\n\
    - Деятельность в области беспроводной связи;\n\
    - Компьютерное программирование, консультационные и другие сопутствующие услуги;\n\
    - Деятельность в области информационного обслуживания.\n\n\
    🔧 **Объектами профессиональной деятельности специалиста являются:**\n\
    - Программируемые мобильные устройства и их составные функциональные части;\n\
    - Радиоэлектронные устройства и специализированные электронные вычислительные устройства (микропроцессоры);\n\
    - Технологии программирования мобильных устройств;\n\
    - Нормативные правовые акты, технические нормативные правовые акты, технологическая документация по разработке программного обеспечения.";

pub const SPECIALTY_ECONOMIC_PLANNING: &str =
    "📊 **ПЛАНОВО-ЭКОНОМИЧЕСКАЯ И АНАЛИТИЧЕСКАЯ ДЕЯТЕЛЬНОСТЬ**\n\n\
    📚 **Специальность:**\n\
    5-04-0311-01 «Планово-экономическая и аналитическая деятельность»\n\n\
    🎓 **Квалификация специалиста:**\n\
    Техник-экономист\n\n\
    🕒 **Продолжительность обучения:**\n\
    На основе общего базового образования — 3 года\n\n\
    🎓 **Форма обучения:**\n\
    Дневная (платная)\n\n\
    📘 **Специалист должен знать:**\n\
    - Основы технологии машиностроения, металлообрабатывающих станков и инструментов;\n\
    - Материалы, которые применяются в машиностроении, и способы их производства;\n\
    - Основы машиностроительного черчения;\n\
    - Основные положения Государственной системы стандартизации, показатели качества продукции, критерии оценки качества, требования к сертификации продукции;\n\
    - Порядок проведения сертификации продукции предприятия;\n\
    - Механизм разработки бизнес-плана и методику расчета технико-экономических показателей;\n\
    - Характеристику методов исследования трудовых процессов и затрат рабочего времени, методологические положения по обоснованию норм труда.";

pub const SPECIALTY_SOFTWARE_DEVELOPMENT: &str =
    "💻 **РАЗРАБОТКА И СОПРОВОЖДЕНИЕ ПРОГРАММНОГО ОБЕСПЕЧЕНИЯ ИНФОРМАЦИОННЫХ СИСТЕМ**\n\n\
    📚 **Специальность:**\n\
    5-04-0612-02 «Разработка и сопровождение программного обеспечения информационных систем»\n\n\
    🎓 **Квалификация:**\n\
    Техник-программист\n\n\
    🕒 **Срок получения образования:**\n\
    На основе общего базового образования – 3 года 10 месяцев\n\n\
    🎓 **Форма получения образования:**\n\
    Дневная\n\n\
    🛠️ **Квалификация рабочего:**\n\
    Оператор электронных вычислительных машин (персональных электронно-вычислительных машин), 5-й разряд\n\n\
    📘 **Основными видами профессиональной деятельности специалиста являются:**\n\
    - Деятельность в области компьютерного программирования;\n\
    - Консультационные услуги в области компьютерных технологий;\n\
    - Деятельность по управлению компьютерными системами.\n\n\
    🔧 **Объектами профессиональной деятельности специалиста являются:**\n\
    - Вычислительные системы (компьютерные системы);\n\
    - Программное обеспечение компьютерных систем (программы, программные комплексы и системы);\n\
    - Системы и технологии разработки программного обеспечения;\n\
    - Сопроводительная документация по разработке программного обеспечения.";

pub const SPECIALTY_ROBOTICS: &str =
    "🤖 **ТЕХНИЧЕСКОЕ ОБСЛУЖИВАНИЕ ТЕХНОЛОГИЧЕСКОГО ОБОРУДОВАНИЯ И СРЕДСТВ РОБОТОТЕХНИКИ В АВТОМАТИЗИРОВАННОМ ПРОИЗВОДСТВЕ**\n\n\
    📚 **Специальность:**\n\
    5-04-0713-08 «Техническая эксплуатация технологического оборудования и средств робототехники в автоматизированном производстве»\n\n\
    🎓 **Квалификация специалиста:**\n\
    Техник-электроник\n\n\
    🛠️ **Квалификации рабочего:**\n\
    - Оператор станков с ПУ (3,4 разряд);\n\
    - Слесарь-электромонтажник (2-3 разряд);\n\
    - Слесарь контрольно-измерительных приборов и автоматики (3-4 разряд);\n\
    - Наладчик технологического оборудования (3-4 разряд);\n\
    - Наладчик контрольно-измерительных приборов и автоматики (4 разряд);\n\
    - Оператор автоматических и полуавтоматических линий станков и установок (3-4 разряд);\n\
    - Электромонтер по ремонту и обслуживанию электрооборудования (3-4 разряд).\n\n\
    🕒 **Продолжительность обучения:**\n\
    - 3 года 7 месяцев (на базе 9 классов);\n\
    - 2 года 7 месяцев (на базе 11 классов).\n\n\
    🎓 **Форма обучения:**\n\
    Дневная (бюджетная)\n\n\
    💼 **Профессиональная сфера деятельности и назначение специалиста:**\n\
    Техник-электроник подготавливается для наладки и эксплуатации электронных систем программного управления на предприятиях машиностроительного комплекса в механических, механосборочных цехах, лабораториях, отделах заводов, производящих и эксплуатирующих электронные системы программного управления. Специалисты работают на должностях техника, техника по ремонту и эксплуатации оборудования, а также на рабочих местах в соответствии с перечнем рабочих профессий высших разрядов, на которых должны быть использованы специалисты со средним специальным образованием.";

pub const SPECIALTY_MACHINING: &str =
    "🔧 **ТЕХНОЛОГИЧЕСКОЕ ОБЕСПЕЧЕНИЕ МАШИНОСТРОИТЕЛЬНОГО ПРОИЗВОДСТВА**\n\n\
    📚 **Специальность:**\n\
    5-04-0714-01 Технологическое обеспечение машиностроительного производства\n\n\
    🎓 **Квалификация специалиста:**\n\
    Техник\n\n\
    🛠️ **Квалификации рабочего:**\n\
    - Оператор станков с программным управлением — 3-4 разряд\n\
    - Токарь — 3-4 разряд\n\
    - Фрезеровщик — 3-4 разряд\n\
    - Контролер станочных и слесарных работ — 3-4 разряд\n\
    - Контролер измерительных приборов и специального инструмента — 3-4 разряд\n\n\
    🕒 **Продолжительность обучения:**\n\
    - На основе общего базового образования — 3 года 7 месяцев\n\
    - На основе общего среднего (специального) образования (лица с ОПФР) — 2 года 7 месяцев\n\n\
    🎓 **Форма обучения:**\n\
    Дневная (бюджетная)\n\n\
    💼 **Профессиональная сфера деятельности и назначение специалиста:**\n\
    Техник подготавливается для производственно-технологической, эксплуатационной и организационно-управленческой деятельности на предприятиях машиностроительного комплекса, в коммерческих и образовательных учреждениях, в механических, механосборочных, ремонтных, инструментальных цехах, лабораториях, технологических бюро и отделах. Специалист может работать на должностях: техника-технолога, мастера, контрольного мастера, а также на рабочих местах в соответствии с перечнем рабочих профессий высших разрядов, которые подлежат замещению специалистами со средним специальным образованием.";

pub const SPECIALTY_TRANSPORT: &str =
    "🚗 **ТЕХНИЧЕСКОЕ ОБСЛУЖИВАНИЕ ЭЛЕКТРОННЫХ СИСТЕМ ТРАНСПОРТНЫХ СРЕДСТВ**\n\n\
    📚 **Специальность:**\n\
    5-04-0715-05 «Техническое обслуживание электронных систем транспортных средств»\n\
    (Специальность 2-36 04 32 «Электроника механических транспортных средств»)\n\n\
    🎓 **Квалификация:**\n\
    Техник-электроник\n\n\
    🕒 **Срок получения образования по специальности составляет:**\n\
    - На основе общего базового образования (9-ти классов) — 3 года 7 месяцев\n\n\
    🎓 **Форма получения образования:**\n\
    Дневная (бюджет)\n\n\
    🛠️ **Наименование профессии рабочего:**\n\
    - Слесарь-электрик по ремонту электрооборудования, 3-4 разряд\n\
    - Электромонтер по ремонту и обслуживанию электрооборудования, 3-4 разряд\n\
    - Слесарь по контрольно-измерительным приборам и автоматике, 3-4 разряд\n\
    - Слесарь по ремонту автомобилей, 3-4 разряд\n\
    - Наладчик контрольно-измерительных приборов и систем автоматики, 4 разряд\n\n\
    💼 **Профессиональная сфера деятельности:**\n\
    Техник-электроник способен обеспечить правильное функционирование технического оборудования, поддерживать бесперебойную работу электроники, организовывать техническое обслуживание электронных устройств, поддерживать их работоспособность, эффективно использовать ресурсы, проводить профилактику и текущий ремонт оборудования и автомобилей. Он контролирует параметры и надежность электронных компонентов, а также проводит проверки для своевременного выявления неисправностей и их устранения.\n\n\
    📍 **Профессиональная сфера деятельности техника-электроника охватывает:**\n\
    Организации различных правовых форм, занимающиеся производством и эксплуатацией электронных систем механических транспортных средств.";
