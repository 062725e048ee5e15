use anyhow::Context;
use args::{process_command_line, CipherType, ProgramSettings, USAGE};
use cipher::{CaesarCipher, Cipher};
use std::{
    env, fs,
    io::{stdin, stdout, Read, Write},
};
use tracing_subscriber::EnvFilter;

use crate::transform::transform_text;

pub mod alphabet;
pub mod args;
pub mod cipher;
pub mod transform;

fn read_input(settings: &ProgramSettings) -> anyhow::Result<String> {
    if settings.input_file.is_empty() {
        let mut input = String::new();
        stdin()
            .read_to_string(&mut input)
            .context("could not read from stdin")?;
        Ok(input)
    } else {
        fs::read_to_string(&settings.input_file)
            .with_context(|| format!("could not read input file '{}'", settings.input_file))
    }
}

fn write_output(settings: &ProgramSettings, text: &str) -> anyhow::Result<()> {
    if settings.output_file.is_empty() {
        writeln!(stdout(), "{text}").context("could not write to stdout")
    } else {
        fs::write(&settings.output_file, format!("{text}\n"))
            .with_context(|| format!("could not write output file '{}'", settings.output_file))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut settings = ProgramSettings::default();
    process_command_line(args.as_slice(), &mut settings)?;

    if settings.help_requested {
        print!("{USAGE}");
        return Ok(());
    }
    if settings.version_requested {
        println!("mpags-cipher {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let input_text = transform_text(&read_input(&settings)?);
    tracing::info!(chars = input_text.len(), mode = ?settings.cipher_mode, "applying cipher");

    let cipher: Box<dyn Cipher> = match settings.cipher_type {
        CipherType::Caesar => Box::new(settings.cipher_key.parse::<CaesarCipher>()?),
    };
    let output_text = cipher.apply_cipher(&input_text, settings.cipher_mode);

    write_output(&settings, &output_text)
}
