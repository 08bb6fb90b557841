use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use scrubber_core::{CleanEvent, Cleaner, CleanupConfig, CleanupResult};

/// Strip marker substrings from names and delete junk entries under the
/// configured directory.
///
/// The root directory, deny-list and removal list are compiled in; the flags
/// below only control logging.
#[derive(Parser, Debug)]
#[command(name = "scrubber")]
#[command(about = "Rename and delete entries in a directory tree by name")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

impl Cli {
    /// 日志级别过滤表达式
    pub fn log_filter(&self) -> String {
        let log_level = if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        };

        format!("scrubber_core={log_level},scrubber_cli={log_level}")
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .init();

    let cleaner = Cleaner::new(CleanupConfig::default());
    info!("使用配置: {:?}", cleaner.config());

    let result = cleaner.run_with_progress(display_event)?;

    if result.failed > 0 {
        warn!("{} 个操作失败，详见上方输出", result.failed);
    }

    display_clean_result(&result);

    Ok(())
}

fn display_event(event: CleanEvent) {
    println!("{event}");
}

fn display_clean_result(result: &CleanupResult) {
    for line in result.summary_lines() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["scrubber"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.debug);
        assert_eq!(cli.log_filter(), "scrubber_core=warn,scrubber_cli=warn");
    }

    #[test]
    fn test_cli_parse_logging_flags() {
        let cli = Cli::try_parse_from(["scrubber", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_filter(), "scrubber_core=info,scrubber_cli=info");

        // debug 优先于 verbose
        let cli = Cli::try_parse_from(["scrubber", "-v", "-d"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.log_filter(), "scrubber_core=debug,scrubber_cli=debug");
    }

    #[test]
    fn test_cli_rejects_path_argument() {
        // 路径在编译期确定，不接受位置参数
        let result = Cli::try_parse_from(["scrubber", "/tmp"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_clean_result() {
        let mut result = CleanupResult::new();
        result.record_rename(scrubber_core::EntryKind::Directory);
        result.record_delete();
        result.finish(Duration::from_millis(10));

        assert_eq!(
            result.summary_lines(),
            [
                "Files renamed: 0".to_string(),
                "Directories renamed: 1".to_string(),
                "Files and directories deleted: 1".to_string(),
                "Elapsed time: 0.01 seconds".to_string(),
            ]
        );
        display_clean_result(&result);
    }

    #[test]
    fn test_display_events_from_run() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::write(root.join("example1_a.txt"), "x")?;
        fs::write(root.join("delete3"), "x")?;

        let cleaner = Cleaner::new(CleanupConfig {
            root: root.to_path_buf(),
            ..Default::default()
        });

        let mut lines = Vec::new();
        let result = cleaner.run_with_progress(|event| {
            lines.push(event.to_string());
            display_event(event);
        })?;

        assert_eq!(result.deleted, 1);
        assert_eq!(result.renamed_files, 1);
        assert_eq!(
            lines,
            vec![
                format!("Deleted file: {}", root.join("delete3").display()),
                format!(
                    "Renamed file: {} -> {}",
                    root.join("example1_a.txt").display(),
                    root.join("_a.txt").display()
                ),
            ]
        );

        Ok(())
    }
}
