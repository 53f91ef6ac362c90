//! Board command - interactive task board session

use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

use taskscribe::config::GlobalConfig;
use taskscribe::output::{OperationResult, OutputMode};
use taskscribe::session::{Reply, Session};

use super::read_transcript;

/// Run a board session, reading one command per line from stdin
pub fn board(file: Option<&Path>, config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    if file.is_some_and(|path| path == Path::new("-")) {
        anyhow::bail!(
            "board reads its commands from stdin; give the transcript as a file \
             or use 'parse <text>' inside the session"
        );
    }

    let mut session = Session::new(&config.board.id_prefix);

    if let Some(path) = file {
        let transcript = read_transcript(Some(path))?;
        session.load_transcript(&transcript).render(mode);
    }

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal() && mode == OutputMode::Human;
    if interactive {
        println!("taskscribe board. Type 'help' for commands, 'quit' to leave.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };

        match session.handle_line(&line?) {
            Ok(Some(Reply::Quit)) => {
                if interactive {
                    Reply::Quit.render(mode);
                }
                break;
            },
            Ok(Some(reply)) => reply.render(mode),
            Ok(None) => {},
            Err(e) => OperationResult {
                success: false,
                message: format!("Error: {e}"),
            }
            .render(mode),
        }
    }

    Ok(())
}
