//! Seeds a staff account.
//!
//! Staff accounts cannot be created through the web signup flow, so this
//! binary inserts one directly:
//!
//! ```sh
//! cargo run --bin add_staff -- <username> <password> <admin|receptionist>
//! ```

use veranda::{
    config::Config, data::staff::StaffRepository, model::auth::StaffRole,
    service::auth::password::hash_password, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);

    let (Some(username), Some(password), Some(role)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("Usage: add_staff <username> <password> <admin|receptionist>");
        std::process::exit(2);
    };

    let role: StaffRole = match role.parse() {
        Ok(role) => role,
        Err(_) => {
            eprintln!("Unknown role '{}', expected 'admin' or 'receptionist'", role);
            std::process::exit(2);
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();

    let password_hash = hash_password(&password).unwrap();

    let staff = StaffRepository::new(&db)
        .create(&username, &password_hash, role)
        .await
        .unwrap();

    println!("Created staff '{}' with ID {}", staff.username, staff.id);
}
