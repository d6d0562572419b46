use super::*;

fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

#[test]
fn test_no_arguments_means_play() {
    let options = parse_args(&[]).unwrap();
    assert_eq!(options.command, Command::Play);
    assert_eq!(options.depth, None);
    assert!(!options.no_bot);
}

#[test]
fn test_play_flags() {
    let options = parse_args(&args("play --color white -d 3 --seed 42 --no-bot")).unwrap();
    assert_eq!(options.command, Command::Play);
    assert_eq!(options.color, Some(Color::White));
    assert_eq!(options.depth, Some(3));
    assert_eq!(options.seed, Some(42));
    assert!(options.no_bot);
}

#[test]
fn test_flags_without_command() {
    let options = parse_args(&args("--config my.toml -c b")).unwrap();
    assert_eq!(options.command, Command::Play);
    assert_eq!(options.config, Some(PathBuf::from("my.toml")));
    assert_eq!(options.color, Some(Color::Black));
}

#[test]
fn test_perft_and_suggest() {
    assert_eq!(parse_args(&args("perft 4")).unwrap().command, Command::Perft(4));
    assert!(parse_args(&args("perft")).is_err());
    assert!(parse_args(&args("perft deep")).is_err());

    let fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";
    let mut line = args("suggest --depth 2");
    line.push("--fen".to_string());
    line.push(fen.to_string());
    let options = parse_args(&line).unwrap();
    assert_eq!(options.command, Command::Suggest);
    assert_eq!(options.fen.as_deref(), Some(fen));
}

#[test]
fn test_bad_arguments() {
    assert!(parse_args(&args("--depth")).is_err());
    assert!(parse_args(&args("--color green")).is_err());
    assert!(parse_args(&args("--seed x")).is_err());
    assert!(parse_args(&args("--frobnicate")).is_err());
}

#[test]
fn test_help() {
    assert_eq!(parse_args(&args("--help")).unwrap().command, Command::Help);
}

#[test]
fn test_overrides_beat_config() {
    let mut config = PlayConfig {
        seed: Some(1),
        ..PlayConfig::default()
    };
    let options = parse_args(&args("--depth 12 --color white --no-bot")).unwrap();
    options.apply(&mut config);
    assert_eq!(config.depth, 6);
    assert_eq!(config.bot_color, Color::White);
    assert!(!config.bot_enabled);
    assert_eq!(config.seed, Some(1), "seed kept when not given");
}
