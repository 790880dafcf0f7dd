use std::env;
use std::fs;

use clap::Shell;

#[path = "src/bin/alphamap/app.rs"]
mod app;

fn main() {
    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR should be set");
    fs::create_dir_all(&out_dir).expect(&format!(
        "couldn't create output directory {}",
        out_dir.to_string_lossy()
    ));

    let mut app = app::app();
    app.gen_completions("alphamap", Shell::Bash, &out_dir);
    app.gen_completions("alphamap", Shell::Fish, &out_dir);
    app.gen_completions("alphamap", Shell::Zsh, &out_dir);
}
