use std::io::{self, BufRead, Write};

use anyhow::bail;
use scribe_transcript::{SpeakerNames, speaker_label};

/// Parse a `--names` argument.
///
/// Entries are comma-separated, either `label=name` pairs
/// (`spk_0=Alice,spk_1=Bob`) or bare names assigned to speakers in order
/// (`Alice,Bob`).
pub fn parse_names_arg(raw: &str) -> anyhow::Result<SpeakerNames> {
    let mut names = SpeakerNames::new();

    for (index, entry) in raw.split(',').enumerate() {
        let entry = entry.trim();
        if entry.is_empty() {
            bail!("empty entry in --names");
        }
        match entry.split_once('=') {
            Some((label, name)) => {
                let (label, name) = (label.trim(), name.trim());
                if label.is_empty() || name.is_empty() {
                    bail!("bad --names entry {entry:?}, expected label=name");
                }
                names.insert(label, name);
            }
            None => names.insert(speaker_label(index), entry),
        }
    }

    Ok(names)
}

/// Prompt on stdin/stdout for one display name per detected speaker.
pub fn collect_speaker_names(count: usize) -> io::Result<SpeakerNames> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_speaker_names(count, &mut stdin.lock(), &mut stdout.lock())
}

fn prompt_speaker_names<R: BufRead, W: Write>(
    count: usize,
    input: &mut R,
    output: &mut W,
) -> io::Result<SpeakerNames> {
    let mut names = SpeakerNames::new();
    if count == 0 {
        return Ok(names);
    }

    writeln!(output, "Detected {count} speakers in the transcript.")?;

    for index in 0..count {
        let label = speaker_label(index);
        loop {
            write!(output, "Name for speaker {} ({label}): ", index + 1)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // stdin closed: keep the raw label rather than loop forever
                break;
            }

            let name = line.trim();
            if name.is_empty() {
                writeln!(output, "Name cannot be empty, try again.")?;
                continue;
            }
            names.insert(label.clone(), name);
            break;
        }
    }

    Ok(names)
}
