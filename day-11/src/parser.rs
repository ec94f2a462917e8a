use nom::{
    character::complete::{multispace0, u64 as stone_value},
    multi::fold_many0,
    sequence::preceded,
    IResult,
};
use tracing::debug;

use crate::count_map::CountMap;

/// Folds whitespace-separated stone values into a [`CountMap`], one stone per
/// value. Stops at the first token that is not an unsigned integer.
pub fn stones(input: &[u8]) -> IResult<&[u8], CountMap> {
    fold_many0(
        preceded(multispace0, stone_value),
        CountMap::new,
        |mut map, value| {
            map.insert(value, 1);
            map
        },
    )(input)
}

/// Parses the puzzle input. Anything from the first malformed token on,
/// including bytes that are not UTF-8, is ignored.
pub fn parse(input: &[u8]) -> CountMap {
    // fold_many0 over complete parsers ends every run with Ok.
    let Ok((rest, map)) = stones(input) else {
        return CountMap::new();
    };

    if rest.iter().any(|byte| !byte.is_ascii_whitespace()) {
        debug!(ignored = rest.len(), "stopped parsing at malformed token");
    }
    map
}
