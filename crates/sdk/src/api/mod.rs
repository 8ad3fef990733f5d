mod cli;
mod client_account;
mod database;
mod domain;
mod extension;
mod ftp_user;
pub(crate) mod http;
mod server;
mod types;

pub use cli::CliApi;
pub use client_account::ClientAccountApi;
pub use database::{DatabaseApi, DatabaseServerApi, DatabaseUserApi};
pub use domain::DomainApi;
pub use extension::ExtensionApi;
pub use ftp_user::FtpUserApi;
pub use server::ServerApi;
pub use types::{API_VERSION_PATH, ApiBaseConfig, ApiResult, ApiSdkError};
