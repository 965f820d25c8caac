use clap::Parser;

use gradient_quad::logging::init_logging;

mod app;
mod args;

use app::App;
use args::Args;

fn main() {
    let args = <Args as Parser>::parse();

    init_logging(if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    let app = match App::new(&args) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Unable to initialize: {e}");
            std::process::exit(1);
        }
    };

    app.run();
}
