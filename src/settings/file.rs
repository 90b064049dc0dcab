//! Settings file persistence.
//!
//! One comma-separated line. `,` and `|` inside free-text fields are
//! escaped with a leading `|`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 12;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let opts = &settings.options;
    let max_retries = opts.max_retries.map(|n| n.to_string()).unwrap_or_default();

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{},{}\n",
        opts.length,
        settings.number_of_passwords,
        opts.lowercase,
        opts.uppercase,
        opts.numbers,
        opts.symbols,
        opts.exclude_similar_characters,
        opts.strict,
        escape(&opts.exclude),
        escape(&opts.symbols_string),
        max_retries,
        escape(&settings.output_file_path),
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return save(settings, path);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        tracing::warn!(
            found = parts.len(),
            expected = FIELDS,
            "malformed settings file, rewriting defaults"
        );
        return save(settings, path);
    }

    let opts = &mut settings.options;
    opts.length = parts[0].parse().unwrap_or(opts.length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    opts.lowercase = parts[2].parse().unwrap_or(opts.lowercase);
    opts.uppercase = parts[3].parse().unwrap_or(opts.uppercase);
    opts.numbers = parts[4].parse().unwrap_or(opts.numbers);
    opts.symbols = parts[5].parse().unwrap_or(opts.symbols);
    opts.exclude_similar_characters = parts[6].parse().unwrap_or(opts.exclude_similar_characters);
    opts.strict = parts[7].parse().unwrap_or(opts.strict);
    opts.exclude = parts[8].clone();
    opts.symbols_string = parts[9].clone();
    opts.max_retries = parts[10].parse().ok();
    settings.output_file_path = parts[11].clone();

    Ok(())
}

pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/genpass/settings", home))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_honours_escapes() {
        assert_eq!(split_escaped("a,|,b,,c||", ','), ["a", ",b", "", "c|"]);
        assert_eq!(split_escaped("x,", ','), ["x", ""]);
    }

    #[test]
    fn save_then_load_keeps_free_text_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genpass").join("settings");

        let mut settings = Settings::default();
        settings.options.length = 24;
        settings.options.strict = true;
        settings.options.symbols = true;
        settings.options.exclude = ",|x".into();
        settings.options.symbols_string = "!,|".into();
        settings.options.max_retries = Some(50);
        settings.number_of_passwords = 3;
        settings.output_file_path = "out,put.txt".into();

        save(&settings, &path).unwrap();
        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();

        assert_eq!(loaded, Settings::default());
        assert!(path.exists());
        assert_eq!(loaded.options.max_retries, None);
    }

    #[test]
    fn malformed_file_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "74,19,false\n").unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, Settings::default());

        let rewritten = fs::read_to_string(&path).unwrap();
        assert_eq!(split_escaped(rewritten.trim_end(), ',').len(), FIELDS);
    }

    #[test]
    fn unparsable_values_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "abc,2,true,false,yes,true,false,false,,,,\n").unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();

        assert_eq!(loaded.options.length, 10);
        assert_eq!(loaded.number_of_passwords, 2);
        assert!(!loaded.options.uppercase);
        assert!(!loaded.options.numbers);
        assert!(loaded.options.symbols);
    }
}
