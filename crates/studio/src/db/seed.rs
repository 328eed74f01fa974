//! Fixture records written on the first read of an absent collection.
//!
//! The sets are fixed: 7 services spanning all catalog categories, 7 users
//! covering all three roles, 7 orders spanning all four statuses, and two
//! seeded chat threads. Timestamps are computed relative to seed time so a
//! fresh installation always shows a plausible recent history.

use chrono::{Duration, SecondsFormat, Utc};

use atma_vision_core::{
    Email, MessageId, OrderId, OrderStatus, Role, Rubles, ServiceId, UserId,
};

use crate::models::{Message, Order, Service, User};

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

fn iso(days_ago: i64) -> String {
    (Utc::now() - Duration::days(days_ago)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// The initial service catalog.
#[must_use]
pub fn initial_services() -> Vec<Service> {
    vec![
        Service {
            id: ServiceId::new("1"),
            title: "IMAGE VISION | FPV-дрон съемка для спортцентров".to_owned(),
            description: "Съемка вашего фитнес-центра на FPV-дрон одним непрерывным кадром — современная виртуальная экскурсия для привлечения клиентов.".to_owned(),
            price: Rubles::new(30_000),
            image: String::new(),
            category: "Спорт".to_owned(),
            details: Some(vec![
                "2 варианта съемки:".to_owned(),
                "Обзорная (30 000 ₽) — пролет по пустым залам, акцент на пространство и оборудование.".to_owned(),
                "Постановочная (от 65 000 ₽) — съемка с актерами/сотрудниками, показ атмосферы живого центра.".to_owned(),
            ]),
        },
        Service {
            id: ServiceId::new("2"),
            title: "Мини-квест \"Ящик видеографа\"".to_owned(),
            description: "Посетитель сайта находит старинный деревянный ящик с надписью \"ATMA VISION\". Ящик принадлежал основателю студии - старому видеографу. Внутри лежат \"ключи\" к пониманию искусства видеосъемки.".to_owned(),
            price: Rubles::new(65_000),
            image: String::new(),
            category: "Event".to_owned(),
            details: Some(vec![
                "Сюжет: Ящик принадлежал основателю студии - старому видеографу. Внутри лежат \"ключи\" к пониманию искусства видеосъемки.".to_owned(),
                "Этапы квеста:".to_owned(),
                "1. Первая находка: Старая кассета VHS".to_owned(),
                "• Нужно \"проявить\" её (навести курсор)".to_owned(),
            ]),
        },
        Service {
            id: ServiceId::new("3"),
            title: "ВИДЕОСЪЕМКА OT ATMA VISION".to_owned(),
            description: "Запечатлеем самые яркие моменты ваших приключений, праздников и важных событий!".to_owned(),
            price: Rubles::new(45_000),
            image: String::new(),
            category: "Праздник".to_owned(),
            details: None,
        },
        Service {
            id: ServiceId::new("4"),
            title: "Корпоративный имиджевый фильм".to_owned(),
            description: "Презентационный фильм о вашей компании. Покажем масштаб, ценности и команду. Идеально для сайта и переговоров.".to_owned(),
            price: Rubles::new(150_000),
            image: String::new(),
            category: "Бизнес".to_owned(),
            details: Some(vec![
                "Разработка сценария и раскадровка".to_owned(),
                "Съемка 2-3 смены (офис, производство)".to_owned(),
                "Интервью с руководителями и сотрудниками".to_owned(),
                "Аэросъемка объектов".to_owned(),
                "Профессиональная озвучка и инфографика".to_owned(),
            ]),
        },
        Service {
            id: ServiceId::new("5"),
            title: "Свадебная видеосъемка \"Премиум\"".to_owned(),
            description: "Многокамерная съемка вашего главного дня. Создаем кинематографичный фильм о вашей любви.".to_owned(),
            price: Rubles::new(80_000),
            image: String::new(),
            category: "Свадьба".to_owned(),
            details: Some(vec![
                "Работа двух операторов (10 часов)".to_owned(),
                "Аэросъемка прогулки".to_owned(),
                "SDE (монтаж ролика в день свадьбы для показа на банкете)".to_owned(),
                "Свадебный фильм (20-40 мин) и клип (3-5 мин)".to_owned(),
                "Цветокоррекция уровня кино".to_owned(),
            ]),
        },
        Service {
            id: ServiceId::new("6"),
            title: "Пакет Reels/Shorts \"Быстрый старт\"".to_owned(),
            description: "Съемка профессионального контента для социальных сетей на месяц вперед. Забудьте о проблеме \"что выложить\".".to_owned(),
            price: Rubles::new(25_000),
            image: String::new(),
            category: "SMM".to_owned(),
            details: Some(vec![
                "Разработка контент-плана (10 роликов)".to_owned(),
                "Студийная или выездная съемка (до 3 часов)".to_owned(),
                "Динамичный монтаж, трендовая музыка, титры".to_owned(),
                "Адаптация под все вертикальные форматы".to_owned(),
            ]),
        },
        Service {
            id: ServiceId::new("7"),
            title: "Видеообзор недвижимости".to_owned(),
            description: "Продающий ролик для риелторов и застройщиков. Повышает конверсию объявлений в 2 раза.".to_owned(),
            price: Rubles::new(15_000),
            image: String::new(),
            category: "Недвижимость".to_owned(),
            details: Some(vec![
                "Динамичный монтаж (до 2 мин)".to_owned(),
                "Широкоугольная съемка интерьера".to_owned(),
                "Акцент на преимуществах планировки и вида".to_owned(),
                "Текстовые плашки с характеристиками".to_owned(),
                "Готовность через 48 часов".to_owned(),
            ]),
        },
    ]
}

/// The initial user accounts: one manager, two operators, four clients.
#[must_use]
pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: UserId::new("admin-1"),
            name: "Главный Менеджер".to_owned(),
            email: Email::new_unchecked("admin@atma.vision"),
            password: "admin".to_owned(),
            role: Role::Manager,
        },
        User {
            id: UserId::new("operator-1"),
            name: "Иван Оператор".to_owned(),
            email: Email::new_unchecked("operator@atma.vision"),
            password: "operator".to_owned(),
            role: Role::Operator,
        },
        User {
            id: UserId::new("operator-2"),
            name: "Елена Камера".to_owned(),
            email: Email::new_unchecked("elena@atma.vision"),
            password: "operator".to_owned(),
            role: Role::Operator,
        },
        User {
            id: UserId::new("client-1"),
            name: "Анна Клиент".to_owned(),
            email: Email::new_unchecked("client@atma.vision"),
            password: "client".to_owned(),
            role: Role::Client,
        },
        User {
            id: UserId::new("client-2"),
            name: "Сергей Петров".to_owned(),
            email: Email::new_unchecked("sergey@example.com"),
            password: "client".to_owned(),
            role: Role::Client,
        },
        User {
            id: UserId::new("client-3"),
            name: "Мария Смирнова".to_owned(),
            email: Email::new_unchecked("maria@example.com"),
            password: "client".to_owned(),
            role: Role::Client,
        },
        User {
            id: UserId::new("client-4"),
            name: "ООО \"ТехноСтрой\"".to_owned(),
            email: Email::new_unchecked("info@technostroy.ru"),
            password: "client".to_owned(),
            role: Role::Client,
        },
    ]
}

/// The initial orders: seven records spanning all four statuses.
#[must_use]
pub fn initial_orders() -> Vec<Order> {
    let now = now_ms();
    vec![
        Order {
            id: OrderId::new("ord-1001"),
            client_id: UserId::new("client-1"),
            service_id: ServiceId::new("3"),
            service_title: "ВИДЕОСЪЕМКА OT ATMA VISION".to_owned(),
            client_name: "Анна Клиент".to_owned(),
            client_contact: "client@atma.vision".to_owned(),
            date: iso(5),
            status: OrderStatus::Completed,
            amount: Rubles::new(45_000),
            created_at: now - 5 * DAY_MS,
            operator_id: Some(UserId::new("operator-1")),
            operator_name: Some("Иван Оператор".to_owned()),
        },
        Order {
            id: OrderId::new("ord-1002"),
            client_id: UserId::new("client-1"),
            service_id: ServiceId::new("1"),
            service_title: "IMAGE VISION | FPV-дрон съемка для спортцентров".to_owned(),
            client_name: "Анна Клиент".to_owned(),
            client_contact: "client@atma.vision".to_owned(),
            date: iso(2),
            status: OrderStatus::Accepted,
            amount: Rubles::new(30_000),
            created_at: now - 2 * DAY_MS,
            operator_id: Some(UserId::new("operator-2")),
            operator_name: Some("Елена Камера".to_owned()),
        },
        Order {
            id: OrderId::new("ord-1003"),
            client_id: UserId::new("client-2"),
            service_id: ServiceId::new("5"),
            service_title: "Свадебная видеосъемка \"Премиум\"".to_owned(),
            client_name: "Сергей Петров".to_owned(),
            client_contact: "sergey@example.com".to_owned(),
            date: iso(10),
            status: OrderStatus::Completed,
            amount: Rubles::new(80_000),
            created_at: now - 10 * DAY_MS,
            operator_id: Some(UserId::new("operator-1")),
            operator_name: Some("Иван Оператор".to_owned()),
        },
        Order {
            id: OrderId::new("ord-1004"),
            client_id: UserId::new("client-2"),
            service_id: ServiceId::new("7"),
            service_title: "Видеообзор недвижимости".to_owned(),
            client_name: "Сергей Петров".to_owned(),
            client_contact: "sergey@example.com".to_owned(),
            date: iso(0),
            status: OrderStatus::Accepted,
            amount: Rubles::new(15_000),
            created_at: now,
            operator_id: Some(UserId::new("operator-1")),
            operator_name: Some("Иван Оператор".to_owned()),
        },
        Order {
            id: OrderId::new("ord-1005"),
            client_id: UserId::new("client-4"),
            service_id: ServiceId::new("4"),
            service_title: "Корпоративный имиджевый фильм".to_owned(),
            client_name: "ООО \"ТехноСтрой\"".to_owned(),
            client_contact: "+7 (900) 123-45-67".to_owned(),
            date: iso(20),
            status: OrderStatus::Completed,
            amount: Rubles::new(150_000),
            created_at: now - 20 * DAY_MS,
            operator_id: None,
            operator_name: None,
        },
        Order {
            id: OrderId::new("ord-1006"),
            client_id: UserId::new("client-4"),
            service_id: ServiceId::new("6"),
            service_title: "Пакет Reels/Shorts \"Быстрый старт\"".to_owned(),
            client_name: "ООО \"ТехноСтрой\"".to_owned(),
            client_contact: "marketing@technostroy.ru".to_owned(),
            date: (Utc::now() - Duration::hours(1))
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            status: OrderStatus::Pending,
            amount: Rubles::new(25_000),
            created_at: now - HOUR_MS,
            operator_id: None,
            operator_name: None,
        },
        Order {
            id: OrderId::new("ord-1007"),
            client_id: UserId::new("client-3"),
            service_id: ServiceId::new("2"),
            service_title: "Мини-квест \"Ящик видеографа\"".to_owned(),
            client_name: "Мария Смирнова".to_owned(),
            client_contact: "maria@example.com".to_owned(),
            date: iso(30),
            status: OrderStatus::Cancelled,
            amount: Rubles::new(65_000),
            created_at: now - 30 * DAY_MS,
            operator_id: None,
            operator_name: None,
        },
    ]
}

/// The initial chat history: two threads, one per in-progress order.
///
/// Seeded messages carry `is_read = true`; only freshly sent messages start
/// unread.
#[must_use]
pub fn initial_messages() -> Vec<Message> {
    let now = now_ms();
    let thread_1002_start = now - 2 * DAY_MS;
    vec![
        Message {
            id: MessageId::new("msg-1"),
            order_id: OrderId::new("ord-1002"),
            sender_id: UserId::new("client-1"),
            sender_name: "Анна Клиент".to_owned(),
            text: "Добрый день! Подскажите, нужна ли какая-то подготовка зала перед съемкой?"
                .to_owned(),
            timestamp: thread_1002_start + HOUR_MS,
            is_read: true,
        },
        Message {
            id: MessageId::new("msg-2"),
            order_id: OrderId::new("ord-1002"),
            sender_id: UserId::new("operator-2"),
            sender_name: "Елена Камера".to_owned(),
            text: "Здравствуйте! Да, желательно убрать лишние предметы с пола и включить всё освещение. Также, если есть фирменная форма у тренеров, лучше, чтобы они были в ней.".to_owned(),
            timestamp: thread_1002_start + 2 * HOUR_MS,
            is_read: true,
        },
        Message {
            id: MessageId::new("msg-3"),
            order_id: OrderId::new("ord-1002"),
            sender_id: UserId::new("client-1"),
            sender_name: "Анна Клиент".to_owned(),
            text: "Поняла, спасибо! А сколько примерно займет монтаж? Нам бы хотелось получить видео к следующей пятнице.".to_owned(),
            timestamp: thread_1002_start + 3 * HOUR_MS,
            is_read: true,
        },
        Message {
            id: MessageId::new("msg-4"),
            order_id: OrderId::new("ord-1002"),
            sender_id: UserId::new("operator-2"),
            sender_name: "Елена Камера".to_owned(),
            text: "Да, конечно. Мы успеем сделать черновой монтаж уже к среде, чтобы у вас было время на правки. К пятнице финал будет готов!".to_owned(),
            timestamp: thread_1002_start + 4 * HOUR_MS,
            is_read: true,
        },
        Message {
            id: MessageId::new("msg-10"),
            order_id: OrderId::new("ord-1004"),
            sender_id: UserId::new("client-2"),
            sender_name: "Сергей Петров".to_owned(),
            text: "Здравствуйте! Оформил заявку на обзор квартиры. Подскажите, когда сможете подъехать?".to_owned(),
            timestamp: now - 5 * HOUR_MS,
            is_read: true,
        },
        Message {
            id: MessageId::new("msg-11"),
            order_id: OrderId::new("ord-1004"),
            sender_id: UserId::new("operator-1"),
            sender_name: "Иван Оператор".to_owned(),
            text: "Добрый день, Сергей! Я назначен на ваш заказ. Могу завтра, ориентировочно в 12:00. Вам удобно?".to_owned(),
            timestamp: now - 4 * HOUR_MS,
            is_read: true,
        },
        Message {
            id: MessageId::new("msg-12"),
            order_id: OrderId::new("ord-1004"),
            sender_id: UserId::new("client-2"),
            sender_name: "Сергей Петров".to_owned(),
            text: "Да, в 12 отлично. Адрес: ул. Пушкина, д. 10, кв. 55. Код домофона 55В.".to_owned(),
            timestamp: now - 7 * HOUR_MS / 2,
            is_read: true,
        },
        Message {
            id: MessageId::new("msg-13"),
            order_id: OrderId::new("ord-1004"),
            sender_id: UserId::new("operator-1"),
            sender_name: "Иван Оператор".to_owned(),
            text: "Принято. Пожалуйста, подготовьте помещение: уберите личные вещи и обеспечьте максимальное освещение.".to_owned(),
            timestamp: now - 3 * HOUR_MS,
            is_read: true,
        },
        Message {
            id: MessageId::new("msg-14"),
            order_id: OrderId::new("ord-1004"),
            sender_id: UserId::new("client-2"),
            sender_name: "Сергей Петров".to_owned(),
            text: "Хорошо, всё сделаем. До встречи!".to_owned(),
            timestamp: now - 14 * HOUR_MS / 5,
            is_read: true,
        },
    ]
}
