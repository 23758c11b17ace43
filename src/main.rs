use braille::{Cell, Policy, TABLE};
use clap::{Parser, Subcommand};
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Subcommand)]
enum Commands {
    /// translate <TEXT> to or from braille, auto-detecting the direction
    #[command(arg_required_else_help = true)]
    Translate {
        /// Text to translate; multiple arguments are joined with single spaces
        text: Vec<String>,
    },
    /// translate plain <TEXT> into braille cells
    #[command(arg_required_else_help = true)]
    Encode {
        /// Text to encode; multiple arguments are joined with single spaces
        text: Vec<String>,
        /// Print the cells as Unicode braille instead of O/. marks
        #[arg(long)]
        unicode: bool,
    },
    /// translate braille cells back into plain text
    #[command(arg_required_else_help = true)]
    Decode {
        /// Cells to decode; multiple arguments are joined with single spaces
        text: Vec<String>,
        /// Fail on windows that match no cell instead of dropping them
        #[arg(long)]
        strict: bool,
    },
    /// print the builtin symbol table
    Table,
}

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "brl")]
#[command(about = "A command line tool to translate to and from Braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Character")]
    character: String,
    #[tabled(rename = "Cell")]
    cell: String,
    #[tabled(rename = "Unicode")]
    unicode: char,
}

fn unicode_cells(marks: &str) -> String {
    let marks: Vec<char> = marks.chars().collect();
    marks
        .chunks(Cell::WIDTH)
        .map(|window| Cell::from_marks(window).map_or('?', |cell| cell.to_unicode()))
        .collect()
}

fn print_table() {
    let mut rows: Vec<TableRow> = TABLE
        .iter()
        .map(|(character, cell)| TableRow {
            character: match character {
                ' ' => "space".to_string(),
                c => c.to_string(),
            },
            cell: cell.to_string(),
            unicode: cell.to_unicode(),
        })
        .collect();
    rows.push(TableRow {
        character: "capital marker".to_string(),
        cell: TABLE.capital().to_string(),
        unicode: TABLE.capital().to_unicode(),
    });
    rows.push(TableRow {
        character: "number marker".to_string(),
        cell: TABLE.number().to_string(),
        unicode: TABLE.number().to_unicode(),
    });
    println!("{}", Table::new(rows).with(Style::sharp()));
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let result = match args.command {
        Commands::Translate { text } => braille::translate(&text.join(" ")),
        Commands::Encode { text, unicode } => braille::encode(&text.join(" "))
            .map(|cells| if unicode { unicode_cells(&cells) } else { cells }),
        Commands::Decode { text, strict } => {
            let policy = if strict { Policy::Strict } else { Policy::Lenient };
            braille::decode_with(&text.join(" "), policy)
        }
        Commands::Table => {
            print_table();
            return;
        }
    };
    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
