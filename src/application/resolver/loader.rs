use super::resolver::Resolver;
use std::path::Path;
use std::time::Instant;
use tokio::fs;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, PartialEq, Eq)]
enum ParsedLine<'a> {
    Skip,
    Pair(&'a str, &'a str),
    Malformed,
}

fn parse_line(line: &str) -> ParsedLine<'_> {
    let content = line.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return ParsedLine::Skip;
    }

    let parts: Vec<&str> = match content.split_once('=') {
        Some((foreign, english)) => vec![foreign.trim(), english.trim()],
        None => content.split_whitespace().collect(),
    };

    match parts.as_slice() {
        [foreign, english] if !foreign.is_empty() && !english.is_empty() => {
            ParsedLine::Pair(*foreign, *english)
        }
        _ => ParsedLine::Malformed,
    }
}

/// Installs every `foreign english` (or `foreign=english`) pair found in the
/// `*.txt` files of `dir` as a custom translation. A missing directory is not
/// an error and loads nothing.
pub async fn load_dictionary_dir(dir: &Path, resolver: &Resolver) -> std::io::Result<usize> {
    let t0 = Instant::now();
    let mut pairs = 0usize;
    let mut file_count = 0usize;

    if !dir.is_dir() {
        log::warn!("dictionary.dir_missing path={}", dir.display());
        return Ok(0);
    }

    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();

        let is_txt_file = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);
        if !is_txt_file {
            continue;
        }

        let file = fs::File::open(&path).await?;
        file_count += 1;
        let mut lines = BufReader::new(file).lines();
        let mut line_no = 0usize;

        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            match parse_line(&line) {
                ParsedLine::Skip => {}
                ParsedLine::Pair(foreign, english) => {
                    resolver.add_custom_translation(foreign, english);
                    pairs += 1;
                }
                ParsedLine::Malformed => {
                    log::warn!(
                        "dictionary.malformed file={} line={} content={:?}",
                        path.display(),
                        line_no,
                        line
                    );
                }
            }
        }
    }

    log::info!(
        "dictionary.loaded pairs={} files={} perf.load_us={}",
        pairs,
        file_count,
        t0.elapsed().as_micros()
    );

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::resolver::StaticDictionary;
    use std::io::Write;

    #[test]
    fn parses_both_pair_syntaxes() {
        assert_eq!(parse_line("gift present"), ParsedLine::Pair("gift", "present"));
        assert_eq!(parse_line("  hus = house "), ParsedLine::Pair("hus", "house"));
        assert_eq!(parse_line("kot\tcat # polish"), ParsedLine::Pair("kot", "cat"));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        assert_eq!(parse_line(""), ParsedLine::Skip);
        assert_eq!(parse_line("   "), ParsedLine::Skip);
        assert_eq!(parse_line("# swedish"), ParsedLine::Skip);
    }

    #[test]
    fn flags_malformed_lines() {
        assert_eq!(parse_line("lonely"), ParsedLine::Malformed);
        assert_eq!(parse_line("one two three"), ParsedLine::Malformed);
        assert_eq!(parse_line("=house"), ParsedLine::Malformed);
    }

    #[tokio::test]
    async fn loads_txt_files_only() {
        let dir = tempfile::tempdir().unwrap();

        let mut sv = std::fs::File::create(dir.path().join("sv.txt")).unwrap();
        writeln!(sv, "# swedish\nhus house\nkatt=cat\nbroken").unwrap();
        let mut pl = std::fs::File::create(dir.path().join("PL.TXT")).unwrap();
        writeln!(pl, "Kot CAT").unwrap();
        let mut notes = std::fs::File::create(dir.path().join("notes.md")).unwrap();
        writeln!(notes, "hund wolf").unwrap();

        let resolver = Resolver::builder().dictionary(StaticDictionary::new()).build();
        let loaded = load_dictionary_dir(dir.path(), &resolver).await.unwrap();

        assert_eq!(loaded, 3);
        assert_eq!(resolver.resolve("hus").await, "house");
        assert_eq!(resolver.resolve("kot").await, "cat");
        assert_eq!(resolver.resolve("hund").await, "hund");
        assert_eq!(resolver.stats().static_translations, 3);
    }

    #[tokio::test]
    async fn missing_directory_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = Resolver::builder().build();
        let loaded = load_dictionary_dir(&dir.path().join("absent"), &resolver)
            .await
            .unwrap();
        assert_eq!(loaded, 0);
    }
}
