use std::{borrow::Cow, str::FromStr};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    core::db::Hours,
    error::{Error, Result},
};

/// Trimmed text, or `None` for a blank line.
pub fn parse_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn parse_int<T: FromStr>(raw: &str) -> Result<Option<T>> {
    parse_text(raw)
        .map(|text| text.parse().map_err(|_| Error::InvalidNumber(text)))
        .transpose()
}

pub fn parse_decimal(raw: &str) -> Result<Option<Hours>> {
    parse_text(raw).map(|text| text.parse()).transpose()
}

/// Line-oriented prompting over an arbitrary input/output pair.
#[derive(Debug)]
pub struct Prompter<I, O> {
    input: I,
    output: O,
    buf: Vec<u8>,
}

impl<I, O> Prompter<I, O>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub async fn println(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Print `prompt: ` and read one line. End of input is [`Error::InputClosed`].
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    async fn read_line(&mut self, prompt: &str) -> Result<Cow<'_, str>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.write_all(b": ").await?;
        self.output.flush().await?;

        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf).await? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(String::from_utf8_lossy(&self.buf))
    }

    pub async fn string_input(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_line(prompt).await.map(|line| parse_text(&line))
    }

    pub async fn int_input<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        parse_int(&self.read_line(prompt).await?)
    }

    pub async fn decimal_input(&mut self, prompt: &str) -> Result<Option<Hours>> {
        parse_decimal(&self.read_line(prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_none() {
        assert_eq!(parse_text(""), None);
        assert_eq!(parse_text("   \n"), None);
        assert_eq!(parse_int::<i32>("\t\n").unwrap(), None);
        assert_eq!(parse_decimal("\n").unwrap(), None);
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(parse_text("  Build CLI \n"), Some("Build CLI".to_string()));
    }

    #[test]
    fn int_errors_name_the_token() {
        let err = parse_int::<i32>(" four \n").unwrap_err();
        assert!(matches!(err, Error::InvalidNumber(ref t) if t == "four"));
        assert_eq!(err.to_string(), "four is not a valid number.");
    }

    #[test]
    fn decimal_parses_after_trim() {
        assert_eq!(
            parse_decimal(" 5 \n").unwrap(),
            Some(Hours::from_hundredths(500))
        );
        assert!(matches!(
            parse_decimal("lots\n"),
            Err(Error::InvalidDecimal(ref t)) if t == "lots"
        ));
    }

    #[tokio::test]
    async fn prompter_writes_prompt_and_reads_line() -> anyhow::Result<()> {
        let mut prompter = Prompter::new(&b"42\n"[..], Vec::new());
        let value: Option<i32> = prompter.int_input("Enter a number").await?;
        assert_eq!(value, Some(42));
        assert_eq!(String::from_utf8(prompter.into_output())?, "Enter a number: ");
        Ok(())
    }

    #[tokio::test]
    async fn prompter_replaces_invalid_utf8() -> anyhow::Result<()> {
        let mut prompter = Prompter::new(&b"\xffname\n"[..], Vec::new());
        let value = prompter.string_input("Name").await?;
        assert_eq!(value.as_deref(), Some("\u{fffd}name"));
        Ok(())
    }

    #[tokio::test]
    async fn prompter_reports_end_of_input() {
        let mut prompter = Prompter::new(&b""[..], Vec::new());
        let result = prompter.string_input("Name").await;
        assert!(matches!(result, Err(Error::InputClosed)));
    }
}
