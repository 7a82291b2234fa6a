use clap::Parser;
use delicious_notes::{load_config, Action, App, Screen};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "delicious-notes")]
#[command(about = "Browse bundled cooking recipes step by step")]
#[command(long_about = "\
Browse bundled cooking recipes step by step

Commands while browsing:
  <n>      open the recipe on row n
  n        next step
  p        previous step
  g <k>    go to step page k
  b        back to the list
  q        quit")]
#[command(version)]
struct Cli {
    /// Directory holding recipes.json and image assets (default: built-in recipes)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the list and every step of every recipe, then exit
    #[arg(long)]
    dump: bool,

    /// Print the loaded recipes as JSON, then exit
    #[arg(long, conflicts_with = "dump")]
    json: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Act(Action),
    Quit,
}

fn parse_command(line: &str, screen: Screen) -> Option<Command> {
    let mut words = line.split_whitespace();
    let word = words.next()?;

    match (word, screen) {
        ("q", _) => Some(Command::Quit),
        ("b", _) => Some(Command::Act(Action::Back)),
        ("n", _) => Some(Command::Act(Action::NextPage)),
        ("p", _) => Some(Command::Act(Action::PreviousPage)),
        ("g", _) => {
            let page: usize = words.next()?.parse().ok()?;
            Some(Command::Act(Action::GoToPage(page.checked_sub(1)?)))
        }
        (row, Screen::List) => {
            let row: usize = row.parse().ok()?;
            Some(Command::Act(Action::Select(row.checked_sub(1)?)))
        }
        _ => None,
    }
}

fn dump(app: &App, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", app.view())?;
    for (index, recipe) in app.recipes().iter().enumerate() {
        for page in 0..recipe.steps.len().max(1) {
            let view = app.render(Screen::Detail {
                recipe: index,
                page,
            });
            writeln!(out, "{}", view)?;
        }
    }
    Ok(())
}

fn dump_json(app: &App, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut *out, app.recipes())?;
    writeln!(out)?;
    Ok(())
}

fn browse(app: &mut App) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", app.view())?;
    for line in stdin.lock().lines() {
        match parse_command(&line?, app.screen()) {
            Some(Command::Quit) => break,
            Some(Command::Act(action)) => {
                app.dispatch(action);
            }
            None => {}
        }
        writeln!(stdout, "{}", app.view())?;
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = load_config()?;
    if let Some(assets) = cli.assets {
        config.assets_dir = Some(assets);
    }

    let mut app = App::start(config);

    if cli.json {
        dump_json(&app, &mut io::stdout().lock())?;
    } else if cli.dump {
        dump(&app, &mut io::stdout().lock())?;
    } else {
        browse(&mut app)?;
    }

    Ok(())
}
