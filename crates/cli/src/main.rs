//! Atma Vision CLI - the command-line front-end of the studio.
//!
//! # Usage
//!
//! ```bash
//! # Log in with a seeded account
//! atma-cli login -e client@atma.vision -p client
//!
//! # Browse the catalog and order a service
//! atma-cli services list
//! atma-cli orders create --service-id 3
//!
//! # Chat on an order, polling for replies
//! atma-cli chat send --order-id ord-1002 --text "Добрый день!"
//! atma-cli chat watch --order-id ord-1002
//!
//! # Manager views
//! atma-cli users set-role --user-id client-3 --role operator
//! atma-cli report --analyze
//! ```
//!
//! Every command goes through the studio library; the substrate is never
//! touched directly. State lives under `ATMA_DATA_DIR` (default `./data`),
//! so sessions persist between invocations like a browser tab's storage.

#![cfg_attr(not(test), forbid(unsafe_code))]
// User-facing listings go to stdout; everything diagnostic goes to tracing.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use atma_vision_studio::config::StudioConfig;
use atma_vision_studio::storage::FileStorage;

mod commands;

use commands::{auth, chat, orders, report, services, users};

#[derive(Parser)]
#[command(name = "atma-cli")]
#[command(author, version, about = "Atma Vision booking CLI")]
struct Cli {
    /// Override the substrate directory (defaults to ATMA_DATA_DIR or ./data)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new client account (and log in)
    Register {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Log in with email and password
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Log out of the current session
    Logout,
    /// Show the currently logged-in user
    Whoami,
    /// Manage users (manager views)
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Browse and manage the service catalog
    Services {
        #[command(subcommand)]
        action: ServicesAction,
    },
    /// Place and manage orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Order chat
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Revenue report (manager view)
    Report {
        /// Also run the AI business analysis
        #[arg(long)]
        analyze: bool,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List all users
    List,
    /// List operators
    Operators,
    /// Change a user's role
    SetRole {
        /// User id (e.g. client-3)
        #[arg(short, long)]
        user_id: String,

        /// New role (client, operator, manager)
        #[arg(short, long)]
        role: String,
    },
}

#[derive(Subcommand)]
enum ServicesAction {
    /// List the catalog
    List,
    /// List distinct categories
    Categories,
    /// Add a catalog service
    Add {
        /// Service title
        #[arg(short, long)]
        title: String,

        /// Price in whole rubles
        #[arg(short, long)]
        price: i64,

        /// Category label
        #[arg(short, long, default_value = "Общее")]
        category: String,

        /// Description
        #[arg(short, long, default_value = "Новая услуга от менеджера")]
        description: String,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders visible to the current user
    List {
        /// Operators: show only orders assigned to me
        #[arg(long)]
        assigned_to_me: bool,
    },
    /// Order a catalog service
    Create {
        /// Catalog service id
        #[arg(short, long)]
        service_id: String,

        /// Contact phone or email (defaults to the session email)
        #[arg(short, long)]
        contact: Option<String>,
    },
    /// Request an individual (custom-priced) production
    Custom {
        /// Category of the request
        #[arg(long)]
        category: String,

        /// What should be produced
        #[arg(long)]
        description: String,

        /// Contact phone or email
        #[arg(long)]
        contact: String,
    },
    /// Change an order's status
    SetStatus {
        /// Order id
        #[arg(short, long)]
        order_id: String,

        /// New status (pending, accepted, completed, cancelled)
        #[arg(short, long)]
        status: String,
    },
    /// Assign or clear an order's operator
    Assign {
        /// Order id
        #[arg(short, long)]
        order_id: String,

        /// Operator user id; omit to clear the assignment
        #[arg(long, default_value = "")]
        operator_id: String,
    },
}

#[derive(Subcommand)]
enum ChatAction {
    /// Print an order's chat history
    History {
        /// Order id
        #[arg(short, long)]
        order_id: String,
    },
    /// Send a message into an order's chat
    Send {
        /// Order id
        #[arg(short, long)]
        order_id: String,

        /// Message text
        #[arg(short, long)]
        text: String,
    },
    /// Follow an order's chat, polling until interrupted
    Watch {
        /// Order id
        #[arg(short, long)]
        order_id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StudioConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.into();
    }
    let storage = FileStorage::open(&config.data_dir)?;

    match cli.command {
        Commands::Register {
            email,
            name,
            password,
        } => auth::register(&storage, &email, &name, &password)?,
        Commands::Login { email, password } => auth::login(&storage, &email, &password)?,
        Commands::Logout => auth::logout(&storage)?,
        Commands::Whoami => auth::whoami(&storage)?,
        Commands::Users { action } => match action {
            UsersAction::List => users::list(&storage)?,
            UsersAction::Operators => users::operators(&storage)?,
            UsersAction::SetRole { user_id, role } => {
                users::set_role(&storage, &user_id, &role)?;
            }
        },
        Commands::Services { action } => match action {
            ServicesAction::List => services::list(&storage)?,
            ServicesAction::Categories => services::categories(&storage)?,
            ServicesAction::Add {
                title,
                price,
                category,
                description,
            } => services::add(&storage, &title, price, &category, &description)?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List { assigned_to_me } => orders::list(&storage, assigned_to_me)?,
            OrdersAction::Create {
                service_id,
                contact,
            } => orders::create(&storage, &service_id, contact.as_deref())?,
            OrdersAction::Custom {
                category,
                description,
                contact,
            } => orders::custom(&storage, &category, &description, &contact)?,
            OrdersAction::SetStatus { order_id, status } => {
                orders::set_status(&storage, &order_id, &status)?;
            }
            OrdersAction::Assign {
                order_id,
                operator_id,
            } => orders::assign(&storage, &order_id, &operator_id)?,
        },
        Commands::Chat { action } => match action {
            ChatAction::History { order_id } => chat::history(&storage, &order_id)?,
            ChatAction::Send { order_id, text } => chat::send(&storage, &order_id, &text)?,
            ChatAction::Watch { order_id } => {
                chat::watch(storage.clone(), &config, &order_id).await?;
            }
        },
        Commands::Report { analyze } => report::show(&storage, &config, analyze).await?,
    }
    Ok(())
}
