use scopeview::{run_scopeview, ViewerConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_scopeview(ViewerConfig::default())
}
