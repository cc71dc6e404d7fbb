//! Interactive prompt for the number of recipes to collect

use crate::HarvestError;
use std::io::{BufRead, Write};

/// Prompt shown before reading the recipe count
pub const MAX_RECIPES_PROMPT: &str = "Enter the number of recipes to crawl: ";

/// Parses one line of prompt input as a positive recipe count
///
/// # Returns
///
/// * `Ok(usize)` - A positive integer
/// * `Err(HarvestError::InvalidInput)` - Not an integer, or not positive;
///   the message is the one shown to the operator
pub fn parse_max_recipes(input: &str) -> Result<usize, HarvestError> {
    let value: i64 = input.trim().parse().map_err(|_| {
        HarvestError::InvalidInput("Invalid input. Please enter a valid integer.".to_string())
    })?;

    if value <= 0 {
        return Err(HarvestError::InvalidInput(
            "Please enter a positive integer.".to_string(),
        ));
    }

    usize::try_from(value).map_err(|_| {
        HarvestError::InvalidInput("Invalid input. Please enter a valid integer.".to_string())
    })
}

/// Asks for the recipe count until a positive integer is entered
///
/// Invalid answers print a short explanation and re-prompt. End of input
/// before a valid answer is an I/O error.
///
/// # Example
///
/// ```
/// use recipe_harvest::prompt::read_max_recipes;
/// use std::io::Cursor;
///
/// let mut output = Vec::new();
/// let count = read_max_recipes(Cursor::new("abc\n-2\n7\n"), &mut output).unwrap();
/// assert_eq!(count, 7);
/// ```
pub fn read_max_recipes<R, W>(mut input: R, mut output: W) -> Result<usize, HarvestError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "{}", MAX_RECIPES_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(HarvestError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before a recipe count was entered",
            )));
        }

        match parse_max_recipes(&line) {
            Ok(count) => return Ok(count),
            Err(HarvestError::InvalidInput(message)) => writeln!(output, "{}", message)?,
            Err(e) => return Err(e),
        }
    }
}
