use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Window width in physical pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,
    /// Window height in physical pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,
    /// Window title
    #[arg(long, default_value = "Gradient quad")]
    pub title: String,
    /// Log debug output unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["gradient-quad"]).unwrap();

        assert_eq!(args.width, 640);
        assert_eq!(args.height, 480);
        assert_eq!(args.title, "Gradient quad");
        assert!(!args.verbose);
    }

    #[test]
    fn size_override() {
        let args =
            Args::try_parse_from(["gradient-quad", "--width", "1280", "--height", "720", "-v"])
                .unwrap();

        assert_eq!((args.width, args.height), (1280, 720));
        assert!(args.verbose);
    }

    #[test]
    fn rejects_negative_size() {
        assert!(Args::try_parse_from(["gradient-quad", "--width", "-1"]).is_err());
    }
}
