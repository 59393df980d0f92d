use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs::{self, DirBuilder, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const CAPITALS_URL: &str = "https://restcountries.com/v3.1/all?fields=capital";

// "assim" appears twice, so it is drawn twice as often as the other words.
const FILLER_WORDS: &[&str] = &[
    "a", "o", "de", "que", "e", "do", "da", "em", "para", "é", "com", "não", "uma", "os",
    "no", "se", "na", "por", "mais", "as", "dos", "como", "mas", "ao", "ele", "era", "nas",
    "tem", "sido", "entre", "sem", "meu", "bem", "seu", "tão", "onde", "nunca", "sempre",
    "muito", "também", "agora", "antes", "depois", "porque", "quando", "enquanto", "senão",
    "assim", "então", "assim",
];

/// Creates a directory if it doesn't exist
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    DirBuilder::new().recursive(true).create(path)?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Writes the country list as a pretty-printed JSON array.
pub fn write_countries_json(path: impl AsRef<Path>, countries: &[&str]) -> Result<()> {
    let path = path.as_ref();
    write_json(path, &countries)?;
    info!(path = %path.display(), count = countries.len(), "wrote countries JSON");
    Ok(())
}

/// Builds one random sentence of filler words with up to two countries
/// spliced in.
pub fn random_sentence<R: Rng + ?Sized>(rng: &mut R, countries: &[&str]) -> String {
    let word_count = rng.gen_range(5..=15);
    let mut sentence = (0..word_count)
        .filter_map(|_| FILLER_WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ");

    let country_count = rng.gen_range(0..=2).min(countries.len());
    let picked: Vec<&str> = countries.choose_multiple(rng, country_count).copied().collect();
    for country in picked {
        // Replaces the first occurrence of the chosen word as a substring
        let target = sentence
            .split_whitespace()
            .collect::<Vec<_>>()
            .choose(rng)
            .map(|word| word.to_string());
        if let Some(target) = target {
            sentence = sentence.replacen(&target, country, 1);
        }
    }

    capitalize(&sentence) + "."
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Writes `lines` random sentences mentioning countries, one per line.
pub fn generate_country_text<R: Rng + ?Sized>(
    path: impl AsRef<Path>,
    lines: usize,
    countries: &[&str],
    rng: &mut R,
) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for _ in 0..lines {
        writeln!(writer, "{}", random_sentence(rng, countries))?;
    }
    writer.flush()?;

    info!(path = %path.display(), lines, "wrote country text");
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct CountryRecord {
    #[serde(default)]
    pub capital: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Capitals {
    pub capitais: Vec<String>,
}

/// Flattens every country's capitals, dropping repeats and keeping the
/// first occurrence.
pub fn collect_capitals(records: Vec<CountryRecord>) -> Capitals {
    let mut seen = FxHashSet::default();
    let capitais = records
        .into_iter()
        .flat_map(|record| record.capital)
        .filter(|capital| seen.insert(capital.clone()))
        .collect();
    Capitals { capitais }
}

pub async fn fetch_capitals(url: &str) -> Result<Capitals> {
    let records: Vec<CountryRecord> = reqwest::get(url)
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()?
        .json()
        .await
        .context("failed to decode countries response")?;
    Ok(collect_capitals(records))
}

pub fn write_capitals_json(path: impl AsRef<Path>, capitals: &Capitals) -> Result<()> {
    let path = path.as_ref();
    write_json(path, capitals)?;
    info!(path = %path.display(), count = capitals.capitais.len(), "wrote capitals JSON");
    Ok(())
}
