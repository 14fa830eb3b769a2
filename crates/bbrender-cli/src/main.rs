use anyhow::{Context, Result, bail};
use bbrender_config::Config;
use bbrender_engine::{NoopHost, Transformer, WidgetStateMap, catalog, io};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

#[derive(Debug, PartialEq)]
enum Command {
    Tags,
    /// Write the default configuration, to `--config` or the default location.
    InitConfig(Option<PathBuf>),
    Convert(ConvertArgs),
}

#[derive(Debug, PartialEq)]
struct ConvertArgs {
    config: Option<PathBuf>,
    standalone: bool,
    input: PathBuf,
    output: Option<PathBuf>,
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [--config PATH] [--standalone] <INPUT|-> [OUTPUT]");
    eprintln!("       {program} [--config PATH] [--standalone] <INPUT_DIR> <OUTPUT_DIR>");
    eprintln!("       {program} --tags");
    eprintln!("       {program} [--config PATH] --init-config");
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config = None;
    let mut standalone = false;
    let mut write_config = false;
    let mut positional = Vec::new();
    let mut rest = args.iter();

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--tags" => return Ok(Command::Tags),
            "--standalone" => standalone = true,
            "--init-config" => write_config = true,
            "--config" => {
                let path = rest.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    if write_config {
        if !positional.is_empty() {
            return Err("--init-config takes no INPUT".to_string());
        }
        return Ok(Command::InitConfig(config));
    }

    let mut positional = positional.into_iter();
    let input = positional.next().ok_or("missing INPUT")?;
    let output = positional.next();
    if positional.next().is_some() {
        return Err("too many arguments".to_string());
    }

    Ok(Command::Convert(ConvertArgs {
        config,
        standalone,
        input,
        output,
    }))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("bbrender-cli");

    let command = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            usage(program);
            process::exit(1);
        }
    };

    match command {
        Command::Tags => print_tags(),
        Command::InitConfig(path) => init_config(path.as_deref()),
        Command::Convert(args) => convert(args),
    }
}

fn print_tags() -> Result<()> {
    let mut out = std::io::stdout().lock();
    for entry in catalog::tags() {
        let category = entry.category.map(|c| c.as_str()).unwrap_or("-");
        let shortcut = entry.shortcut.unwrap_or("");
        writeln!(
            out,
            "{:<28} {:<14} {:<8} {}",
            entry.snippet().replace('\n', "\\n"),
            entry.label,
            category,
            shortcut
        )?;
    }
    Ok(())
}

fn init_config(path: Option<&Path>) -> Result<()> {
    let config = Config::default();
    let written = match path {
        Some(path) => {
            config.save_to_path(path)?;
            path.to_path_buf()
        }
        None => {
            config.save()?;
            Config::config_path()
        }
    };
    log::info!("wrote default config to {}", written.display());
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let stylesheet = args.standalone.then_some(config.stylesheet.as_deref());
    let transformer = Transformer::new(config.render);

    if args.input.is_dir() {
        let Some(output_dir) = args.output else {
            bail!("directory input needs an OUTPUT_DIR");
        };
        return convert_dir(&transformer, &args.input, &output_dir, stylesheet);
    }

    let source = if args.input == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        source
    } else {
        fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read {}", args.input.display()))?
    };

    let html = render_page(&transformer, &source, stylesheet);
    match args.output {
        Some(path) => {
            fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("converted {} -> {}", args.input.display(), path.display());
        }
        None => std::io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}

fn convert_dir(
    transformer: &Transformer,
    input_dir: &Path,
    output_dir: &Path,
    stylesheet: Option<Option<&Path>>,
) -> Result<()> {
    let files = io::scan_bbcode_files(input_dir)?;
    if files.is_empty() {
        log::warn!("no .bbcode or .bb files below {}", input_dir.display());
    }

    for file in &files {
        let source = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let target = io::output_path_for(input_dir, file)?;
        let html = render_page(transformer, &source, stylesheet);
        io::write_file(&target, output_dir, &html)?;
        log::info!("converted {} -> {}", file.display(), target);
    }

    Ok(())
}

/// Render one document. `stylesheet` is `Some` in standalone mode.
fn render_page(
    transformer: &Transformer,
    source: &str,
    stylesheet: Option<Option<&Path>>,
) -> String {
    let mut widgets = WidgetStateMap::new();
    let body = transformer.transform(source, &mut widgets, &mut NoopHost);
    match stylesheet {
        Some(stylesheet) => standalone_document(&body, stylesheet),
        None => body,
    }
}

fn standalone_document(body: &str, stylesheet: Option<&Path>) -> String {
    let link = stylesheet
        .map(|path| {
            let href = path.to_string_lossy();
            format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                html_escape::encode_double_quoted_attribute(&href)
            )
        })
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n{link}</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_file_conversion() {
        let command = parse_args(&args(&["--standalone", "post.bbcode", "post.html"])).unwrap();
        assert_eq!(
            command,
            Command::Convert(ConvertArgs {
                config: None,
                standalone: true,
                input: PathBuf::from("post.bbcode"),
                output: Some(PathBuf::from("post.html")),
            })
        );
    }

    #[test]
    fn test_parse_config_and_stdin() {
        let command = parse_args(&args(&["--config", "c.toml", "-"])).unwrap();
        let Command::Convert(convert) = command else {
            panic!("expected conversion");
        };
        assert_eq!(convert.config, Some(PathBuf::from("c.toml")));
        assert_eq!(convert.input, PathBuf::from("-"));
        assert_eq!(convert.output, None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--bogus", "a"])).is_err());
        assert!(parse_args(&args(&["a", "b", "c"])).is_err());
        assert_eq!(parse_args(&args(&["--tags"])), Ok(Command::Tags));
        assert!(parse_args(&args(&["--init-config", "post.bbcode"])).is_err());
    }

    #[test]
    fn test_init_config_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let command = parse_args(&args(&["--config", path.to_str().unwrap(), "--init-config"])).unwrap();
        assert_eq!(command, Command::InitConfig(Some(path.clone())));

        init_config(Some(&path)).unwrap();

        let loaded = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(loaded, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_standalone_links_stylesheet() {
        let html = standalone_document("<strong>x</strong>", Some(Path::new("osu.css")));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="osu.css">"#));
        assert!(html.contains("<body>\n<strong>x</strong>\n</body>"));
    }

    #[test]
    fn test_convert_dir_mirrors_layout() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::create_dir_all(input.path().join("guides")).unwrap();
        fs::write(input.path().join("guides/intro.bbcode"), "[b]hi[/b]").unwrap();
        fs::write(input.path().join("skip.txt"), "[b]no[/b]").unwrap();

        convert_dir(&Transformer::default(), input.path(), output.path(), None).unwrap();

        let html = fs::read_to_string(output.path().join("guides/intro.html")).unwrap();
        assert_eq!(html, "<strong>hi</strong>");
        assert!(!output.path().join("skip.html").exists());
    }
}
