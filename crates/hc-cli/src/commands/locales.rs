use hc_core::Config;
use hc_errors::ErrorFormatter;

pub fn execute(config: &Config) {
  let formatter = ErrorFormatter::new(&config.locale);
  for tag in formatter.get_available_locales() {
    let marker = if tag == formatter.locale().tag() { "*" } else { " " };
    println!("{} {}", marker, tag);
  }
}
