// amount-checker is a directory retention tool
// Copyright (C) 2025  Javier Lancha Vázquez <javier.lancha@gmail.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

#![cfg(test)]

mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result};
    use amount_checker::{
        backend::localfs::LocalFS,
        commands::cmd_check,
        config::Config,
        retention::Enforcement,
        utils::duration::DurationSpec,
    };
    use chrono::{DateTime, Local};
    use tempfile::tempdir;

    use crate::test_utils::{create_file_aged, create_file_with_age, list_names};

    fn test_now() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(1_750_000_000)
    }

    fn config_for(dir: &std::path::Path, files_limit: usize, duration_limit: &str) -> Result<Config> {
        Ok(Config {
            files_limit,
            duration_limit: DurationSpec::parse(duration_limit)?,
            load_dir: dir.to_path_buf(),
        })
    }

    fn check(config: &Config) -> Result<Enforcement> {
        cmd_check::check(config, &LocalFS::new(), DateTime::<Local>::from(test_now()))
    }

    #[test]
    fn test_exactly_at_limit_deletes_nothing() -> Result<()> {
        let tmp_dir = tempdir()?;
        let dir = tmp_dir.path();
        for (i, name) in ["a.log", "b.log", "c.log"].iter().enumerate() {
            create_file_aged(dir, name, 400 + i as u64, test_now())?;
        }

        let result = check(&config_for(dir, 3, "1day")?)?;

        assert!(matches!(
            result,
            Enforcement::WithinLimit { count: 3, limit: 3 }
        ));
        assert_eq!(list_names(dir)?, vec!["a.log", "b.log", "c.log"]);
        Ok(())
    }

    #[test]
    fn test_count_limit_deletes_oldest() -> Result<()> {
        let tmp_dir = tempdir()?;
        let dir = tmp_dir.path();
        create_file_aged(dir, "day5.log", 5, test_now())?;
        create_file_aged(dir, "day1.log", 1, test_now())?;
        create_file_aged(dir, "day4.log", 4, test_now())?;
        create_file_aged(dir, "day2.log", 2, test_now())?;
        create_file_aged(dir, "day3.log", 3, test_now())?;

        let Enforcement::Pruned(outcome) = check(&config_for(dir, 2, "3month")?)? else {
            panic!("Expected the directory to be pruned");
        };

        assert!(outcome.deleted_by_age.is_empty());
        assert_eq!(
            outcome
                .deleted_by_count
                .iter()
                .map(|e| e.name())
                .collect::<Vec<_>>(),
            vec!["day5.log", "day4.log", "day3.log"]
        );
        assert_eq!(list_names(dir)?, vec!["day1.log", "day2.log"]);
        Ok(())
    }

    #[test]
    fn test_age_limit_then_count_limit() -> Result<()> {
        let tmp_dir = tempdir()?;
        let dir = tmp_dir.path();
        create_file_aged(dir, "ancient.log", 200, test_now())?;
        create_file_aged(dir, "old.log", 120, test_now())?;
        for days in 1..=5 {
            create_file_aged(dir, &format!("recent{}.log", days), days, test_now())?;
        }

        let Enforcement::Pruned(outcome) = check(&config_for(dir, 3, "3month")?)? else {
            panic!("Expected the directory to be pruned");
        };

        assert_eq!(outcome.deleted_by_age.len(), 2);
        assert_eq!(outcome.deleted_by_count.len(), 2);
        assert_eq!(outcome.deleted_count(), 4);
        assert_eq!(
            list_names(dir)?,
            vec!["recent1.log", "recent2.log", "recent3.log"]
        );
        Ok(())
    }

    #[test]
    fn test_age_limit_ignores_count_limit() -> Result<()> {
        let tmp_dir = tempdir()?;
        let dir = tmp_dir.path();
        create_file_aged(dir, "old0.log", 30, test_now())?;
        create_file_aged(dir, "old1.log", 20, test_now())?;
        create_file_aged(dir, "new.log", 1, test_now())?;

        check(&config_for(dir, 2, "1week")?)?;

        assert_eq!(list_names(dir)?, vec!["new.log"]);
        Ok(())
    }

    #[test]
    fn test_second_run_deletes_nothing() -> Result<()> {
        let tmp_dir = tempdir()?;
        let dir = tmp_dir.path();
        for days in [300, 200, 10, 9, 8, 7, 6] {
            create_file_aged(dir, &format!("{}.bak", days), days, test_now())?;
        }
        let config = config_for(dir, 4, "1month")?;

        check(&config)?;
        let after_first = list_names(dir)?;
        assert_eq!(after_first, vec!["6.bak", "7.bak", "8.bak", "9.bak"]);

        let second = check(&config)?;
        assert!(matches!(
            second,
            Enforcement::WithinLimit { count: 4, limit: 4 }
        ));
        assert_eq!(list_names(dir)?, after_first);
        Ok(())
    }

    #[test]
    fn test_invalid_target_directory_fails() -> Result<()> {
        let tmp_dir = tempdir()?;
        let file_path = create_file_aged(tmp_dir.path(), "not_a_dir", 500, test_now())?;

        assert!(check(&config_for(&tmp_dir.path().join("missing"), 0, "1day")?).is_err());
        assert!(check(&config_for(&file_path, 0, "1day")?).is_err());
        assert!(file_path.exists());
        Ok(())
    }

    #[test]
    fn test_subdirectories_are_opaque_entries() -> Result<()> {
        let tmp_dir = tempdir()?;
        let dir = tmp_dir.path();

        let full_dir = dir.join("full");
        std::fs::create_dir(&full_dir)?;
        create_file_aged(&full_dir, "inner.log", 1, test_now())?;
        filetime::set_file_mtime(
            &full_dir,
            filetime::FileTime::from_system_time(test_now() - Duration::from_secs(10 * 24 * 3600)),
        )?;
        create_file_aged(dir, "a.log", 3, test_now())?;
        create_file_aged(dir, "b.log", 2, test_now())?;

        let Enforcement::Pruned(outcome) = check(&config_for(dir, 2, "1year")?)? else {
            panic!("Expected the directory to be pruned");
        };

        // The non-empty directory is the oldest entry but cannot be removed,
        // so the next-oldest file goes instead
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0.name(), "full");
        assert_eq!(list_names(dir)?, vec!["b.log", "full"]);
        assert!(full_dir.join("inner.log").exists());
        Ok(())
    }

    #[test]
    fn test_settings_file_with_invalid_files_limit() -> Result<()> {
        let tmp_dir = tempdir()?;
        let logs_dir = tmp_dir.path().join("logs");
        std::fs::create_dir(&logs_dir)?;

        for i in 0..3 {
            create_file_aged(&logs_dir, &format!("old{}.log", i), 30 + i, test_now())?;
        }
        for i in 0..22 {
            let age = Duration::from_secs(3600 * (1 + i));
            create_file_with_age(&logs_dir, &format!("new{:02}.log", i), age, test_now())?;
        }

        let settings_path = tmp_dir.path().join("ac.toml");
        std::fs::write(
            &settings_path,
            format!(
                "files-limit = \"twenty\"\nduration-limit = \"10day\"\nload-dir = \"{}\"\n",
                logs_dir.to_string_lossy().replace('\\', "\\\\")
            ),
        )
        .with_context(|| "Failed to write settings")?;

        let config = Config::load(&settings_path);
        assert_eq!(config.files_limit, 21);
        assert_eq!(config.load_dir, logs_dir);

        let Enforcement::Pruned(outcome) = check(&config)? else {
            panic!("Expected the directory to be pruned");
        };

        // Three files are older than 10 days, then one more goes to reach 21
        assert_eq!(outcome.deleted_by_age.len(), 3);
        assert_eq!(
            outcome
                .deleted_by_count
                .iter()
                .map(|e| e.name())
                .collect::<Vec<_>>(),
            vec!["new21.log"]
        );
        assert_eq!(list_names(&logs_dir)?.len(), 21);
        Ok(())
    }
}
