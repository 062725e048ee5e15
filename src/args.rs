use clap::ValueEnum;
use derive_more::Display;

use crate::cipher::CipherMode;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ArgsError {
    #[display(fmt = "{}", _0)]
    MissingArgument(String),
    #[display(fmt = "{}", _0)]
    UnknownArgument(String),
}

impl std::error::Error for ArgsError {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CipherType {
    #[default]
    Caesar,
}

/// Settings the command line can change
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramSettings {
    pub help_requested: bool,
    pub version_requested: bool,
    /// empty means stdin
    pub input_file: String,
    /// empty means stdout
    pub output_file: String,
    /// passed through unvalidated, the cipher parses it
    pub cipher_key: String,
    pub cipher_mode: CipherMode,
    pub cipher_type: CipherType,
}

pub const USAGE: &str = "\
Usage: mpags-cipher [-h/--help] [--version] [-i <file>] [-o <file>] [-c <cipher>] [-k <key>] [--encrypt/--decrypt]

Encrypts/Decrypts input alphanumeric text using classical ciphers

Available options:

  -h|--help        Print this help message and exit

  --version        Print version information

  -i FILE          Read text to be processed from FILE
                   Stdin will be used if not supplied

  -o FILE          Write processed text to FILE
                   Stdout will be used if not supplied

  -c CIPHER        Specify the cipher to be used to perform the encryption/decryption
                   CIPHER can only be caesar for now

  -k KEY           Specify the cipher KEY
                   A null key, i.e. no encryption, is used if not supplied

  --encrypt        Will use the cipher to encrypt the input text (default behaviour)

  --decrypt        Will use the cipher to decrypt the input text
";

const FLAGS: [&str; 9] = [
    "-h",
    "--help",
    "--version",
    "-i",
    "-o",
    "-k",
    "-c",
    "--encrypt",
    "--decrypt",
];

/// Value of the flag at `args[index]`. A recognized flag in that slot means the value is missing.
fn value_of<'a>(args: &'a [impl AsRef<str>], index: usize) -> Result<&'a str, ArgsError> {
    let flag = args[index].as_ref();
    match args.get(index + 1).map(|value| value.as_ref()) {
        Some(value) if !FLAGS.contains(&value) => Ok(value),
        _ => Err(ArgsError::MissingArgument(format!("{flag} requires an argument"))),
    }
}

/// Processes `args` left to right, writing each recognized flag into `settings`.
///
/// Stops at the first bad token; fields set before it stay set.
pub fn process_command_line(
    args: &[impl AsRef<str>],
    settings: &mut ProgramSettings,
) -> Result<(), ArgsError> {
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_ref();
        tracing::debug!(index = i, arg, "processing argument");
        match arg {
            "-h" | "--help" => settings.help_requested = true,
            "--version" => settings.version_requested = true,
            "--encrypt" => settings.cipher_mode = CipherMode::Encrypt,
            "--decrypt" => settings.cipher_mode = CipherMode::Decrypt,
            "-i" | "-o" | "-k" | "-c" => {
                let value = value_of(args, i)?;
                match arg {
                    "-i" => settings.input_file = value.to_owned(),
                    "-o" => settings.output_file = value.to_owned(),
                    "-k" => settings.cipher_key = value.to_owned(),
                    _ => {
                        settings.cipher_type = <CipherType as ValueEnum>::from_str(value, true)
                            .map_err(|_| {
                                ArgsError::UnknownArgument(format!(
                                    "unknown cipher '{value}' given to -c"
                                ))
                            })?;
                    }
                }
                i += 1;
            }
            _ => return Err(ArgsError::UnknownArgument(format!("unknown argument '{arg}'"))),
        }
        i += 1;
    }
    Ok(())
}
