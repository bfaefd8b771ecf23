use crate::Seat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Vacant,
    Occupied {
        seat: Seat,
    },
}

impl Field {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Field::Vacant)
    }

    pub fn seat(&self) -> Option<Seat> {
        match self {
            Field::Vacant => None,
            Field::Occupied { seat } => Some(*seat),
        }
    }
}
