use super::*;

#[test]
fn output_file_name_follows_topic() {
    assert_eq!(output_file_name("Mars", "html"), "Mars_presentation.html");
    assert_eq!(output_file_name("AC/DC", "json"), "AC_DC_presentation.json");
}

#[test]
fn default_options_use_current_dir() {
    let opts = DeckRunOptions::default();
    assert_eq!(opts.out_dir, PathBuf::from("."));
    assert_eq!(opts.work_dir, PathBuf::from("."));
}
