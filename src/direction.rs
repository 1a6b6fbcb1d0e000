use crate::errors::FinderError;
use std::fmt;
use std::str::FromStr;

/// One of the eight compass directions a word can run in.
///
/// `y` grows downward, so `Down` is `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
    DownLeft,
    DownRight,
    UpLeft,
    UpRight,
}

impl Direction {
    /// Every direction, in the order a search tries them.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::DownLeft,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::UpRight,
    ];

    /// Unit step `(dx, dy)` for this direction.
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
        }
    }

    /// Left and Right are the only directions that can wrap.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "Right",
            Direction::Left => "Left",
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::DownLeft => "DownLeft",
            Direction::DownRight => "DownRight",
            Direction::UpLeft => "UpLeft",
            Direction::UpRight => "UpRight",
        }
    }

    /// Comma-separated list of every direction name, for error messages.
    #[must_use]
    pub fn valid_names() -> String {
        Direction::ALL.iter().map(|d| d.name()).collect::<Vec<_>>().join(", ")
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl FromStr for Direction {
    type Err = FinderError;

    /// Case-insensitive; `-` and `_` are ignored so `up-left` and `UP_LEFT` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().to_lowercase() == folded)
            .ok_or_else(|| FinderError::InvalidDirectionToken { token: s.to_string() })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of directions, used to exclude directions from a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionSet(u8);

impl DirectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[must_use]
    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in search order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        let set = *self;
        Direction::ALL.into_iter().filter(move |d| set.contains(*d))
    }

    /// Parse direction names, each of which may itself be a comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirectionToken` for the first name that is not a direction.
    pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, FinderError> {
        let mut set = DirectionSet::new();
        for token in tokens {
            for part in token.as_ref().split(',').filter(|p| !p.trim().is_empty()) {
                set.insert(part.parse()?);
            }
        }
        Ok(set)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::new();
        for d in iter {
            set.insert(d);
        }
        set
    }
}
