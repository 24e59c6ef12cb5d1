use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let ask = clap::Command::new("ask")
        .about("Search the web and generate an answer with sources")
        .arg(clap::arg!(<QUERY> "The question or search query"))
        .arg(clap::arg!(--no_enrich "Answer from search snippets without fetching pages"))
        .arg(clap::arg!(--json "Print the response as JSON"));

    let extract = clap::Command::new("extract")
        .about("Extract readable text from a URL, local HTML file, or stdin")
        .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--max_chars <NUM> "Maximum characters of text before truncation").default_value("2000"))
        .arg(
            clap::arg!(--min_chars <NUM> "Minimum characters for a content selector to be accepted")
                .default_value("200"),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("10"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"));

    let mut cmd = clap::Command::new("sift")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Sift Contributors")
        .about("Answers from the web, with sources")
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand_required(true)
        .subcommand(ask)
        .subcommand(extract);

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "sift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "sift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "sift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "sift", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
