use std::fmt;
use std::marker::PhantomData;

/// Integer identifier tagged with the kind of entity it names.
///
/// The tag keeps a room number from being passed where a reservation id is
/// expected, while the value itself stays a plain `u32`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Id<T> {
    pub id: u32,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub const fn new(id: u32) -> Self {
        Id { id, _marker: PhantomData }
    }

    pub fn value(&self) -> u32 {
        self.id
    }

    /// Returns the id following this one, or `None` at `u32::MAX`.
    pub fn next(&self) -> Option<Self> {
        self.id.checked_add(1).map(Id::new)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> From<u32> for Id<T> {
    fn from(id: u32) -> Self {
        Id::new(id)
    }
}

impl<T> From<Id<T>> for u32 {
    fn from(id_wrapper: Id<T>) -> Self {
        id_wrapper.id
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct RoomTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ReservationTag;

pub type RoomNumber = Id<RoomTag>;
pub type ReservationId = Id<ReservationTag>;
