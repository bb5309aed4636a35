use anyhow::Context;
use chrono::Days;
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;

use hotel_reservations::api::hotel_dto::HotelDto;
use hotel_reservations::domain::clock::{Clock, SystemClock};
use hotel_reservations::domain::hotel::guest::Guest;
use hotel_reservations::domain::hotel::hotel::Hotel;
use hotel_reservations::domain::hotel::reservation::ReservationState;
use hotel_reservations::domain::utils::id::RoomNumber;
use hotel_reservations::{generate_hotel, logger};

/// Walks a small hotel through a day of bookings and prints the result.
#[derive(Debug, Parser)]
#[command(name = "hotel", version)]
struct Args {
    /// Hotel configuration file (JSON). The stock catalog is used when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Overrides the hotel name from the configuration.
    #[arg(short, long)]
    name: Option<String>,

    /// Prints the occupancy report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let mut hotel = match &args.config {
        Some(path) => generate_hotel(path, clock.clone()).with_context(|| format!("loading '{}'", path))?,
        None => {
            let mut dto = HotelDto::default();
            if let Some(name) = &args.name {
                dto.name = name.clone();
            }
            Hotel::try_from((dto, clock.clone()))?
        }
    };

    if let (Some(_), Some(name)) = (&args.config, &args.name) {
        log::warn!("--name '{}' is ignored when a configuration file is given.", name);
    }

    println!("{}", format!("=== {} ===", hotel.name()).bold());

    let available = hotel.list_available_rooms(None);
    println!("\n{}", "AVAILABLE ROOMS:".bold());
    for room in available.iter().take(5) {
        println!("{}", room);
    }
    if available.len() > 5 {
        println!("... and {} more available rooms", available.len() - 5);
    }

    let today = hotel.today();
    let day = |offset: u64| today.checked_add_days(Days::new(offset)).context("date out of range");

    let joao = Arc::new(Guest::new("João Silva", "123.456.789-00").with_email("joao@email.com").with_phone("(11) 99999-1111"));
    let maria = Guest::new("Maria Santos", "987.654.321-00").with_email("maria@email.com").with_phone("(11) 88888-2222");

    println!("\n{}", "BOOKING:".bold());
    let numbers = |values: &[u32]| values.iter().copied().map(RoomNumber::new).collect::<Vec<_>>();

    let first_booking = hotel.create_reservation(joao.clone(), &numbers(&[101, 102]), day(1)?, day(4)?)?;
    println!("Created: {}", first_booking);
    let second_booking = hotel.create_reservation(maria, &numbers(&[301]), day(2)?, day(5)?)?;
    println!("Created: {}", second_booking);

    match hotel.create_reservation(joao.clone(), &numbers(&[301]), day(2)?, day(3)?) {
        Ok(reservation) => println!("Created: {}", reservation),
        Err(e) => println!("{} {}", "Rejected:".red(), e),
    }

    println!("\n{}", "CHECK-IN:".bold());
    let walk_in = hotel.create_reservation(joao, &numbers(&[201]), day(0)?, day(3)?)?;
    let checked_in = hotel.check_in(walk_in.id())?;
    println!("{} {}", "Checked in:".green(), checked_in);

    println!("\n{}", "ACTIVE RESERVATIONS:".bold());
    for reservation in hotel.list_reservations(Some(ReservationState::Active)) {
        println!("{}", reservation);
    }

    println!();
    let report = hotel.occupancy_report();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
