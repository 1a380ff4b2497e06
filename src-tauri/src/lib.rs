//! Mensa Backend
//!
//! Tauri shell around `mensa-core`:
//! - configuration and logging setup
//! - app state holding the repositories and the admin session
//! - commands: Tauri command handlers

use std::sync::Arc;
use tauri::{Emitter, Manager};
use tokio::sync::Mutex;

use mensa_core::config::CONFIG_FILE;
use mensa_core::{
    AppConfig, AuthSession, DishRepository, KeyValueStore, LocalAuthProvider, PlanRepository,
    SqliteStore,
};

mod commands;

/// Event carrying every auth state change to the frontend
pub const AUTH_STATE_EVENT: &str = "auth-state-changed";

/// Environment variables seeding the first admin account
const ADMIN_EMAIL_ENV: &str = "MENSA_ADMIN_EMAIL";
const ADMIN_PASSWORD_ENV: &str = "MENSA_ADMIN_PASSWORD";

/// Application state shared across commands
pub struct AppState {
    pub dish_repo: Mutex<DishRepository>,
    pub plan_repo: Mutex<PlanRepository>,
    pub auth: Arc<AuthSession>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, auth: Arc<AuthSession>) -> Self {
        Self {
            dish_repo: Mutex::new(DishRepository::new(store.clone())),
            plan_repo: Mutex::new(PlanRepository::new(store)),
            auth,
        }
    }
}

/// Add the admin named in the environment to the config, if any
fn seed_admin_from_env(config: &mut AppConfig) -> bool {
    match (std::env::var(ADMIN_EMAIL_ENV), std::env::var(ADMIN_PASSWORD_ENV)) {
        (Ok(email), Ok(password)) if !email.trim().is_empty() && !password.is_empty() => {
            config.ensure_admin(&email, &password)
        }
        _ => false,
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            let config_path = app_handle.path().app_config_dir()?.join(CONFIG_FILE);
            let mut config = AppConfig::load_or_init(&config_path)?.with_env_overrides();
            if seed_admin_from_env(&mut config) {
                config.save(&config_path)?;
            }

            rolling_logger::init_logger_with(
                app_handle.path().app_log_dir()?,
                "MensaApp",
                rolling_logger::LoggerOptions {
                    level: config.log_level.clone(),
                    ..Default::default()
                },
            )?;
            rolling_logger::info(&format!("Config loaded from {}", config_path.display()))?;

            let data_dir = app_handle.path().app_data_dir()?;
            std::fs::create_dir_all(&data_dir)?;
            let store_path = data_dir.join(&config.store_file);
            let sqlite = SqliteStore::open(&store_path)?;
            log::info!("Device store opened at {}", store_path.display());
            app.manage(sqlite.clone());
            let store: Arc<dyn KeyValueStore> = Arc::new(sqlite);

            let provider = LocalAuthProvider::new(config.admins.clone());
            let auth = Arc::new(AuthSession::new(Arc::new(provider)));

            // Forward auth changes so the login screen can redirect
            let mut changes = auth.subscribe();
            let emitter = app_handle.clone();
            tauri::async_runtime::spawn(async move {
                while changes.changed().await.is_ok() {
                    let state = changes.borrow_and_update().clone();
                    if let Err(e) = emitter.emit(AUTH_STATE_EVENT, &state) {
                        log::warn!("Failed to emit {}: {}", AUTH_STATE_EVENT, e);
                    }
                }
            });

            app.manage(AppState::new(store, auth));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Dishes
            commands::load_dishes,
            commands::add_dish,
            commands::remove_dish,
            // Plans
            commands::load_plans,
            commands::load_plan_rows,
            commands::add_plan,
            // Admin session
            commands::sign_in,
            commands::sign_out,
            commands::auth_state,
            // Calendar
            commands::calendar_week,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            if let tauri::RunEvent::Exit = event {
                if let Some(store) = app_handle.try_state::<SqliteStore>() {
                    tauri::async_runtime::block_on(store.close());
                    log::info!("Device store closed");
                }
            }
        });
}
