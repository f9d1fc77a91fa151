//! Command-line arguments
//!
//! Every option can also come from an environment variable. Unset options
//! fall through to the TOML config file, then to compiled defaults.

use std::path::PathBuf;

use clap::Parser;
use exam_common::config::ConfigOverrides;

/// Command-line arguments for exam-api
#[derive(Parser, Debug)]
#[command(name = "exam-api")]
#[command(about = "Exam results lookup and statistics service")]
#[command(version)]
pub struct Args {
    /// Port to listen on [default: 3000]
    #[arg(short, long, env = "EXAM_PORT")]
    pub port: Option<u16>,

    /// Address to bind [default: 0.0.0.0]
    #[arg(long, env = "EXAM_BIND")]
    pub bind: Option<String>,

    /// Results CSV file [default: diem_thi_thpt_2024.csv]
    #[arg(short, long, env = "EXAM_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Directory served for non-API paths [default: .]
    #[arg(short, long, env = "EXAM_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Log level when RUST_LOG is unset [default: info]
    #[arg(long, env = "EXAM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// TOML config file
    #[arg(short, long, env = "EXAM_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            port: self.port,
            bind: self.bind.clone(),
            data_file: self.data_file.clone(),
            static_dir: self.static_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}
