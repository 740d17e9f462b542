/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/
use std::io::Write;
use std::path::Path;

use clap::{ArgAction, Args, Parser, Subcommand};
use energyplus::{
    ForwardTranslator, ForwardTranslatorOptions, LogLevel, LogMessage, ReverseTranslator,
    TranslatorError,
};
use idf::Workspace;
use model::Model;

/// The options we can pass to the program
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct StudioOptions {
    /// Print more details (-v for info, -vv for debug)
    #[clap(short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do
    #[clap(subcommand)]
    pub command: Command,
}

/// The things this program can do
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translates a model into an IDF file
    Translate(TranslateOptions),

    /// Imports an IDF file into a model
    Import(ImportOptions),
}

/// The options of the `translate` command
#[derive(Args, Debug, Default, Clone)]
pub struct TranslateOptions {
    /// The input model (`.sml` or `.json`)
    pub input_file: String,

    /// Specifies the path to which to write the IDF.
    /// If none is given, STDOUT is used
    #[clap(short = 'o')]
    pub output: Option<String>,

    /// A JSON5 file with the translator options. The flags
    /// below are applied on top of it.
    #[clap(long = "options")]
    pub options_file: Option<String>,

    /// Report tabular results in IP units
    #[clap(long)]
    pub ip_units: bool,

    /// Do not request the SQLite output
    #[clap(long)]
    pub no_sqlite: bool,

    /// Do not request the HTML report
    #[clap(long)]
    pub no_html: bool,

    /// Do not request the variable dictionary
    #[clap(long)]
    pub no_variable_dictionary: bool,
}

/// The options of the `import` command
#[derive(Args, Debug, Default, Clone)]
pub struct ImportOptions {
    /// The IDF file
    pub input_file: String,

    /// Specifies the path to which to write the model as JSON.
    /// If none is given, STDOUT is used
    #[clap(short = 'o')]
    pub output: Option<String>,
}

impl TranslateOptions {
    /// Builds the [`ForwardTranslatorOptions`], reading the options file
    /// if there is one
    pub fn translator_options(&self) -> Result<ForwardTranslatorOptions, TranslatorError> {
        let mut ret = match &self.options_file {
            Some(path) => ForwardTranslatorOptions::from_file(path)?,
            None => ForwardTranslatorOptions::default(),
        };
        ret.ip_tabular_output |= self.ip_units;
        ret.exclude_sqlite_output_report |= self.no_sqlite;
        ret.exclude_html_output_report |= self.no_html;
        ret.exclude_variable_dictionary |= self.no_variable_dictionary;
        Ok(ret)
    }
}

/// Reads a model, from JSON if the extension says so and from the
/// `.sml` text format otherwise
pub fn read_model<P: AsRef<Path>>(path: P) -> Result<Model, TranslatorError> {
    let is_json = path
        .as_ref()
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let model = if is_json {
        Model::from_json_file(path)?
    } else {
        Model::from_file(path)?
    };
    Ok(model)
}

fn write_output<W: Write>(mut out: W, content: &str) -> Result<(), TranslatorError> {
    out.write_all(content.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|source| TranslatorError::Io {
            path: "<output>".to_string(),
            source,
        })
}

/// Translates the model in `options.input_file`, writing the IDF
/// into `out`. Returns the messages of the translator.
pub fn run_translate<W: Write>(
    options: &TranslateOptions,
    out: W,
) -> Result<Vec<LogMessage>, TranslatorError> {
    let model = read_model(&options.input_file)?;
    let mut translator = ForwardTranslator::with_options(options.translator_options()?);
    let workspace = translator.translate_model(&model);
    write_output(out, &workspace.to_string())?;
    Ok(translator.log_messages().to_vec())
}

/// Imports the IDF in `options.input_file`, writing the model as JSON
/// into `out`. Returns the messages of the translator.
pub fn run_import<W: Write>(
    options: &ImportOptions,
    out: W,
) -> Result<Vec<LogMessage>, TranslatorError> {
    let workspace = Workspace::from_file(&options.input_file)?;
    let mut translator = ReverseTranslator::new();
    let model = translator.translate_workspace(&workspace);
    write_output(out, &model.to_json()?)?;
    Ok(translator.log_messages().to_vec())
}

/// Runs a command, writing into the output file or into STDOUT. The
/// output file is only created once the translation is done.
pub fn run(command: &Command) -> Result<Vec<LogMessage>, TranslatorError> {
    let mut buffer: Vec<u8> = Vec::new();
    let (messages, output) = match command {
        Command::Translate(o) => (run_translate(o, &mut buffer)?, &o.output),
        Command::Import(o) => (run_import(o, &mut buffer)?, &o.output),
    };
    match output {
        Some(path) => std::fs::write(path, &buffer).map_err(|source| TranslatorError::Io {
            path: path.clone(),
            source,
        })?,
        None => std::io::stdout()
            .lock()
            .write_all(&buffer)
            .map_err(|source| TranslatorError::Io {
                path: "<stdout>".to_string(),
                source,
            })?,
    }
    Ok(messages)
}

/// Keeps the warnings and errors, which are what users need to see
pub fn relevant_messages(messages: &[LogMessage]) -> Vec<&LogMessage> {
    messages.iter().filter(|m| m.level >= LogLevel::Warn).collect()
}
