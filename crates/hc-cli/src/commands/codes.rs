use anyhow::{bail, Result};
use clap::Args;
use hc_errors::{codes, suggestions, ErrorCategory};

#[derive(Args, Debug)]
pub struct CodesArgs {
  /// Only list codes in this category (e.g. security, compliance, file_upload)
  #[arg(short, long)]
  category: Option<String>,
}

pub fn execute(args: CodesArgs) -> Result<()> {
  let rows = listing(args.category.as_deref())?;
  println!("{:<28} {:<17} {:<9} SUGGESTION", "CODE", "CATEGORY", "SEVERITY");
  for row in rows {
    println!("{}", row);
  }
  Ok(())
}

fn listing(category: Option<&str>) -> Result<Vec<String>> {
  let wanted = category.map(|name| name.to_ascii_lowercase());
  let rows: Vec<String> = codes::all()
    .filter_map(|code| {
      let category = ErrorCategory::classify(code);
      if wanted.as_deref().is_some_and(|name| name != category.as_str()) {
        return None;
      }
      Some(format!(
        "{:<28} {:<17} {:<9} {}",
        code,
        category,
        category.severity(),
        suggestions::suggestion(code).unwrap_or("-")
      ))
    })
    .collect();

  if rows.is_empty() {
    if let Some(name) = category {
      bail!("Unknown error category: {}", name);
    }
  }
  Ok(rows)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_listing_filters_by_category() {
    let rows = listing(Some("Compliance")).unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.contains("compliance")));
    assert!(rows[0].starts_with("HIPAA_VIOLATION"));
  }

  #[test]
  fn test_listing_everything() {
    assert_eq!(listing(None).unwrap().len(), codes::all().count());
  }

  #[test]
  fn test_unknown_category() {
    assert!(listing(Some("astrology")).is_err());
  }
}
