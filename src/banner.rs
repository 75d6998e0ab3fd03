// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
                 _   _               _
 _ __ ___   __ _| |_| |__  ___  ___ | |_   _____
| '_ ` _ \ / _` | __| '_ \/ __|/ _ \| \ \ / / _ \
| | | | | | (_| | |_| | | \__ \ (_) | |\ V /  __/
|_| |_| |_|\__,_|\__|_| |_|___/\___/|_| \_/ \___|

    Math Problem Solving Gateway
"#;
    println!("{}", banner);
}
