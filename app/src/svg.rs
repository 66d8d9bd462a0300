// Icon by Font-Awesome -> https://fontawesome.com/

// Ugly hack with the concat!() but, good enough for now
pub static SPINNER: &str = concat!(include_str!("svg/spinner.svg"), "Saving&nbsp;...");
