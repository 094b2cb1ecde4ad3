//! Reading navigation commands from stdin.
//!
//! A background thread reads one line at a time and forwards every recognised
//! command to the shell loop over a channel.
use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, info, warn};

use crate::shell::NavCommand;

pub struct InputReader;

impl InputReader {
    /// Spawn the stdin thread. It ends on EOF, on a read error, or once the shell
    /// has stopped listening.
    pub fn start(commands: Sender<NavCommand>) {
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Failed to read input: {}", e);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match NavCommand::parse(&line) {
                    Some(command) => {
                        debug!("Input command: {:?}", command);
                        if commands.send(command).is_err() {
                            break;
                        }
                    }
                    None => warn!("Unknown command: {}", line.trim()),
                }
            }
            info!("Input thread stopping...");
        });
    }
}
