use crate::config::ChatConfig;
use crate::error::ResponderError;
use crate::responder::Responder;
use crate::similarity::Similarity;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Responder(#[from] ResponderError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Runs the question/answer loop until the exit word or end of input.
///
/// A responder error stops the loop and is returned to the caller.
pub fn run<S, R, W>(
    responder: &Responder<S>,
    config: &ChatConfig,
    mut input: R,
    output: &mut W,
) -> Result<(), ChatError>
where
    S: Similarity,
    R: BufRead,
    W: Write,
{
    loop {
        let mut line = String::new();
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        if input.read_line(&mut line)? == 0 {
            break; // EOF (Ctrl+D)
        }

        let question = line.trim();

        if question.to_lowercase() == config.exit_word.to_lowercase() {
            writeln!(output, "{}{}", config.bot_label, config.farewell)?;
            break;
        }

        let answer = responder.answer(question)?;
        writeln!(output, "{}{}", config.bot_label, answer)?;
    }

    Ok(())
}
