use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::hotel_dto::HotelDto;
use crate::domain::clock::Clock;
use crate::domain::hotel::guest::Guest;
use crate::domain::hotel::occupancy::OccupancyReport;
use crate::domain::hotel::reservation::{Reservation, ReservationState};
use crate::domain::hotel::reservation_store::ReservationStore;
use crate::domain::hotel::room::{Room, RoomCategory};
use crate::domain::hotel::room_registry::RoomRegistry;
use crate::domain::utils::id::{ReservationId, RoomNumber};
use crate::error::{ConversionError, HotelError};

/// The hotel aggregate: room catalog, reservation history and id counter.
///
/// All mutation of rooms and reservations goes through the operations below.
/// Listing operations hand out copies, never references into the aggregate.
#[derive(Debug)]
pub struct Hotel {
    name: String,
    rooms: RoomRegistry,
    reservations: ReservationStore,
    next_reservation_id: ReservationId,
    clock: Arc<dyn Clock>,
}

impl TryFrom<(HotelDto, Arc<dyn Clock>)> for Hotel {
    type Error = ConversionError;

    fn try_from(args: (HotelDto, Arc<dyn Clock>)) -> Result<Self, ConversionError> {
        let (dto, clock) = args;

        let mut rooms = Vec::new();
        for category_dto in dto.categories {
            let category: RoomCategory = category_dto.category.parse()?;

            if category_dto.first_number > category_dto.last_number {
                return Err(ConversionError::InvalidNumberRange {
                    first: category_dto.first_number,
                    last: category_dto.last_number,
                });
            }

            rooms.extend(
                (category_dto.first_number..=category_dto.last_number)
                    .map(|number| Room::new(RoomNumber::new(number), category, category_dto.nightly_rate)),
            );
        }

        Hotel::with_rooms(dto.name, rooms, clock)
    }
}

impl Hotel {
    /// Builds a hotel from an explicit room list, kept in the given order.
    pub fn with_rooms(name: impl Into<String>, rooms: Vec<Room>, clock: Arc<dyn Clock>) -> Result<Hotel, ConversionError> {
        let mut registry = RoomRegistry::new();
        for room in rooms {
            registry.add(room)?;
        }

        if registry.is_empty() {
            return Err(ConversionError::EmptyCatalog);
        }

        let hotel = Hotel {
            name: name.into(),
            rooms: registry,
            reservations: ReservationStore::new(),
            next_reservation_id: ReservationId::new(1),
            clock,
        };
        log::info!("Hotel '{}' opened with {} rooms.", hotel.name, hotel.rooms.len());

        Ok(hotel)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Copy of the whole catalog in registry order.
    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.rooms().cloned().collect()
    }

    pub fn list_available_rooms(&self, category: Option<RoomCategory>) -> Vec<Room> {
        self.rooms.list_available(category)
    }

    pub fn find_room(&self, number: RoomNumber) -> Option<Room> {
        self.rooms.find_by_number(number).cloned()
    }

    /// Books `room_numbers` for `guest` from `check_in` to `check_out`.
    ///
    /// Validation stops at the first failure, in this order: date range, check-in
    /// not in the past, at least one room, then per requested number: exists,
    /// not requested twice, available. A rejected request changes nothing.
    pub fn create_reservation(
        &mut self,
        guest: impl Into<Arc<Guest>>,
        room_numbers: &[RoomNumber],
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Reservation, HotelError> {
        let guest = guest.into();
        self.try_create_reservation(guest, room_numbers, check_in, check_out)
            .inspect(|reservation| log::info!("Created {}.", reservation))
            .inspect_err(|e| log::warn!("Reservation for {:?} rejected: {}", room_numbers, e))
    }

    fn try_create_reservation(
        &mut self,
        guest: Arc<Guest>,
        room_numbers: &[RoomNumber],
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Reservation, HotelError> {
        if check_in >= check_out {
            return Err(HotelError::InvalidDateRange { check_in, check_out });
        }

        let today = self.clock.today();
        if check_in < today {
            return Err(HotelError::PastCheckIn { check_in, today });
        }

        if room_numbers.is_empty() {
            return Err(HotelError::NoRoomsRequested);
        }

        let mut requested: Vec<&Room> = Vec::with_capacity(room_numbers.len());
        for &number in room_numbers {
            let room = self.rooms.find_by_number(number).ok_or(HotelError::RoomNotFound(number))?;

            if requested.iter().any(|taken| taken.number == number) {
                return Err(HotelError::DuplicateRoom(number));
            }

            if !room.available {
                return Err(HotelError::RoomUnavailable(number));
            }

            requested.push(room);
        }

        let id = self.next_reservation_id;
        let next_id = id.next().ok_or(HotelError::ReservationIdsExhausted)?;
        let reservation = Reservation::new(id, guest, &requested, check_in, check_out);

        self.next_reservation_id = next_id;
        self.rooms.set_available(reservation.rooms(), false);
        self.reservations.add(reservation.clone());

        Ok(reservation)
    }

    /// Active -> CheckedIn, allowed from the booked check-in date on.
    pub fn check_in(&mut self, id: ReservationId) -> Result<Reservation, HotelError> {
        self.transition(id, ReservationState::CheckedIn)
    }

    /// CheckedIn -> CheckedOut, releases the rooms.
    pub fn check_out(&mut self, id: ReservationId) -> Result<Reservation, HotelError> {
        self.transition(id, ReservationState::CheckedOut)
    }

    /// Active or CheckedIn -> Cancelled, releases the rooms.
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<Reservation, HotelError> {
        self.transition(id, ReservationState::Cancelled)
    }

    fn transition(&mut self, id: ReservationId, to: ReservationState) -> Result<Reservation, HotelError> {
        let today = self.clock.today();

        let result = match self.reservations.get_mut(id) {
            None => Err(HotelError::ReservationNotFound(id)),
            Some(reservation) => reservation.check_transition(to, today).map(|()| {
                reservation.set_state(to);
                if let Some(available) = to.room_availability() {
                    self.rooms.set_available(reservation.rooms(), available);
                }
                reservation.clone()
            }),
        };

        match &result {
            Ok(reservation) => log::info!("Reservation #{} is now {} (total {:.2}).", id, to, reservation.total_price()),
            Err(e) => log::warn!("Transition of reservation #{} to {} rejected: {}", id, to, e),
        }

        result
    }

    pub fn find_reservation(&self, id: ReservationId) -> Result<Reservation, HotelError> {
        self.reservations.get(id).cloned().ok_or(HotelError::ReservationNotFound(id))
    }

    /// Reservation history in creation order, optionally filtered by state.
    pub fn list_reservations(&self, state: Option<ReservationState>) -> Vec<Reservation> {
        self.reservations.list(state)
    }

    pub fn occupancy_report(&self) -> OccupancyReport {
        log::debug!("Building occupancy report for '{}'.", self.name);
        OccupancyReport::from_registry(&self.name, self.clock.today(), &self.rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::hotel_dto::CategoryDto;
    use crate::domain::clock_mock::MockClock;
    use chrono::Days;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn day(offset: u64) -> NaiveDate {
        today().checked_add_days(Days::new(offset)).unwrap()
    }

    fn rooms(numbers: &[u32]) -> Vec<RoomNumber> {
        numbers.iter().copied().map(RoomNumber::new).collect()
    }

    fn hotel() -> (Hotel, MockClock) {
        let clock = MockClock::new(today());
        let hotel = Hotel::try_from((HotelDto::default(), Arc::new(clock.clone()) as Arc<dyn Clock>)).unwrap();
        (hotel, clock)
    }

    fn guest() -> Guest {
        Guest::new("João Silva", "123.456.789-00").with_email("joao@email.com")
    }

    #[test]
    fn default_catalog_is_seeded_in_range_order() {
        let (hotel, _) = hotel();
        let all = hotel.rooms();
        assert_eq!(all.len(), 35);
        assert_eq!(all.first().map(|room| room.number), Some(RoomNumber::new(101)));
        assert_eq!(all.last().map(|room| room.number), Some(RoomNumber::new(305)));
        assert_eq!(hotel.list_available_rooms(Some(RoomCategory::Luxury)).len(), 10);
        assert_eq!(hotel.find_room(RoomNumber::new(301)).map(|room| room.nightly_rate), Some(Decimal::new(500, 0)));
    }

    #[test]
    fn reservation_ids_are_sequential() {
        let (mut hotel, _) = hotel();
        let first = hotel.create_reservation(guest(), &rooms(&[101]), day(0), day(1)).unwrap();
        let second = hotel.create_reservation(guest(), &rooms(&[102]), day(0), day(1)).unwrap();
        assert_eq!(first.id(), ReservationId::new(1));
        assert_eq!(second.id(), ReservationId::new(2));
    }

    #[test]
    fn rejected_requests_do_not_consume_ids() {
        let (mut hotel, _) = hotel();
        assert!(hotel.create_reservation(guest(), &rooms(&[999]), day(0), day(1)).is_err());
        let reservation = hotel.create_reservation(guest(), &rooms(&[101]), day(0), day(1)).unwrap();
        assert_eq!(reservation.id(), ReservationId::new(1));
    }

    #[test]
    fn validation_runs_in_order() {
        let (mut hotel, _) = hotel();
        let yesterday = today().pred_opt().unwrap();

        // Date range beats past check-in.
        assert_eq!(
            hotel.create_reservation(guest(), &rooms(&[101]), yesterday, yesterday),
            Err(HotelError::InvalidDateRange { check_in: yesterday, check_out: yesterday })
        );
        // Past check-in beats unknown rooms.
        assert_eq!(
            hotel.create_reservation(guest(), &rooms(&[999]), yesterday, day(2)),
            Err(HotelError::PastCheckIn { check_in: yesterday, today: today() })
        );
        assert_eq!(hotel.create_reservation(guest(), &[], day(0), day(2)), Err(HotelError::NoRoomsRequested));
        // Room checks follow request order.
        hotel.create_reservation(guest(), &rooms(&[102]), day(0), day(2)).unwrap();
        assert_eq!(
            hotel.create_reservation(guest(), &rooms(&[102, 999]), day(0), day(2)),
            Err(HotelError::RoomUnavailable(RoomNumber::new(102)))
        );
        assert_eq!(
            hotel.create_reservation(guest(), &rooms(&[999, 102]), day(0), day(2)),
            Err(HotelError::RoomNotFound(RoomNumber::new(999)))
        );
    }

    #[test]
    fn duplicate_room_numbers_are_rejected() {
        let (mut hotel, _) = hotel();
        assert_eq!(
            hotel.create_reservation(guest(), &rooms(&[201, 202, 201]), day(1), day(3)),
            Err(HotelError::DuplicateRoom(RoomNumber::new(201)))
        );
        assert_eq!(hotel.list_available_rooms(Some(RoomCategory::Luxury)).len(), 10);
        assert!(hotel.list_reservations(None).is_empty());
    }

    #[test]
    fn failed_creation_leaves_rooms_untouched() {
        let (mut hotel, _) = hotel();
        hotel.create_reservation(guest(), &rooms(&[103]), day(0), day(2)).unwrap();

        let result = hotel.create_reservation(guest(), &rooms(&[101, 102, 103]), day(0), day(2));
        assert_eq!(result, Err(HotelError::RoomUnavailable(RoomNumber::new(103))));
        assert!(hotel.find_room(RoomNumber::new(101)).unwrap().available);
        assert!(hotel.find_room(RoomNumber::new(102)).unwrap().available);
        assert_eq!(hotel.list_reservations(None).len(), 1);
    }

    #[test]
    fn check_in_respects_the_clock() {
        let (mut hotel, clock) = hotel();
        let reservation = hotel.create_reservation(guest(), &rooms(&[301]), day(2), day(5)).unwrap();

        assert_eq!(
            hotel.check_in(reservation.id()),
            Err(HotelError::CheckInTooEarly { id: reservation.id(), check_in: day(2), today: today() })
        );
        assert_eq!(hotel.find_reservation(reservation.id()).unwrap().state(), ReservationState::Active);

        clock.advance_days(2);
        let checked_in = hotel.check_in(reservation.id()).unwrap();
        assert_eq!(checked_in.state(), ReservationState::CheckedIn);
        assert!(!hotel.find_room(RoomNumber::new(301)).unwrap().available);
    }

    #[test]
    fn cancel_releases_rooms_for_new_bookings() {
        let (mut hotel, _) = hotel();
        let reservation = hotel.create_reservation(guest(), &rooms(&[201, 202]), day(0), day(3)).unwrap();

        let cancelled = hotel.cancel_reservation(reservation.id()).unwrap();
        assert_eq!(cancelled.state(), ReservationState::Cancelled);
        assert_eq!(hotel.list_available_rooms(Some(RoomCategory::Luxury)).len(), 10);

        assert!(hotel.create_reservation(guest(), &rooms(&[202]), day(0), day(1)).is_ok());
        assert!(matches!(hotel.cancel_reservation(reservation.id()), Err(HotelError::InvalidTransition { .. })));
        // The second booking still holds 202.
        assert!(!hotel.find_room(RoomNumber::new(202)).unwrap().available);
    }

    #[test]
    fn unknown_reservation_ids_are_reported() {
        let (mut hotel, _) = hotel();
        let missing = ReservationId::new(42);
        assert_eq!(hotel.check_in(missing), Err(HotelError::ReservationNotFound(missing)));
        assert_eq!(hotel.check_out(missing), Err(HotelError::ReservationNotFound(missing)));
        assert_eq!(hotel.cancel_reservation(missing), Err(HotelError::ReservationNotFound(missing)));
        assert_eq!(hotel.find_reservation(missing), Err(HotelError::ReservationNotFound(missing)));
    }

    #[test]
    fn reservations_can_be_listed_by_state() {
        let (mut hotel, _) = hotel();
        let first = hotel.create_reservation(guest(), &rooms(&[101]), day(0), day(1)).unwrap();
        let second = hotel.create_reservation(guest(), &rooms(&[102]), day(0), day(1)).unwrap();
        let third = hotel.create_reservation(guest(), &rooms(&[103]), day(0), day(1)).unwrap();
        hotel.check_in(second.id()).unwrap();
        hotel.cancel_reservation(third.id()).unwrap();

        let ids = |state| hotel.list_reservations(state).iter().map(Reservation::id).collect::<Vec<_>>();
        assert_eq!(ids(None), vec![first.id(), second.id(), third.id()]);
        assert_eq!(ids(Some(ReservationState::Active)), vec![first.id()]);
        assert_eq!(ids(Some(ReservationState::CheckedIn)), vec![second.id()]);
        assert_eq!(ids(Some(ReservationState::Cancelled)), vec![third.id()]);
        assert!(ids(Some(ReservationState::CheckedOut)).is_empty());
    }

    #[test]
    fn exhausted_id_counter_rejects_without_side_effects() {
        let (mut hotel, _) = hotel();
        hotel.next_reservation_id = ReservationId::new(u32::MAX);

        assert_eq!(
            hotel.create_reservation(guest(), &rooms(&[101]), day(0), day(1)),
            Err(HotelError::ReservationIdsExhausted)
        );
        assert!(hotel.find_room(RoomNumber::new(101)).unwrap().available);
        assert!(hotel.list_reservations(None).is_empty());
    }

    #[test]
    fn explicit_room_lists_are_validated_like_configuration() {
        let clock: Arc<dyn Clock> = Arc::new(MockClock::new(today()));

        let negative = vec![Room::new(RoomNumber::new(1), RoomCategory::Standard, Decimal::new(-10000, 2))];
        assert_eq!(
            Hotel::with_rooms("Neg", negative, clock.clone()).err(),
            Some(ConversionError::NegativeRate { category: RoomCategory::Standard, rate: Decimal::new(-10000, 2) })
        );

        let mut occupied = Room::new(RoomNumber::new(1), RoomCategory::Standard, Decimal::new(10000, 2));
        occupied.available = false;
        let mut hotel = Hotel::with_rooms("Seeded", vec![occupied], clock).unwrap();
        assert_eq!(hotel.occupancy_report().occupied_rooms, 0);
        assert_eq!(hotel.list_available_rooms(None).len(), 1);

        let reservation = hotel.create_reservation(guest(), &rooms(&[1]), day(0), day(1)).unwrap();
        assert_eq!(reservation.total_price(), Decimal::new(10000, 2));
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let clock: Arc<dyn Clock> = Arc::new(MockClock::new(today()));

        let unknown = HotelDto { name: "X".into(), categories: vec![CategoryDto::new("Attic", Decimal::ONE, 1, 2)] };
        assert_eq!(
            Hotel::try_from((unknown, clock.clone())).err(),
            Some(ConversionError::UnknownRoomCategory("Attic".to_string()))
        );

        let reversed = HotelDto { name: "X".into(), categories: vec![CategoryDto::new("Suite", Decimal::ONE, 9, 2)] };
        assert_eq!(
            Hotel::try_from((reversed, clock.clone())).err(),
            Some(ConversionError::InvalidNumberRange { first: 9, last: 2 })
        );

        let negative = HotelDto { name: "X".into(), categories: vec![CategoryDto::new("Suite", Decimal::NEGATIVE_ONE, 1, 2)] };
        assert_eq!(
            Hotel::try_from((negative, clock.clone())).err(),
            Some(ConversionError::NegativeRate { category: RoomCategory::Suite, rate: Decimal::NEGATIVE_ONE })
        );

        let overlapping = HotelDto {
            name: "X".into(),
            categories: vec![CategoryDto::new("Standard", Decimal::ONE, 1, 5), CategoryDto::new("Suite", Decimal::TEN, 5, 6)],
        };
        assert_eq!(
            Hotel::try_from((overlapping, clock.clone())).err(),
            Some(ConversionError::DuplicateRoomNumber(RoomNumber::new(5)))
        );

        let empty = HotelDto { name: "X".into(), categories: vec![] };
        assert_eq!(Hotel::try_from((empty, clock)).err(), Some(ConversionError::EmptyCatalog));
    }
}
