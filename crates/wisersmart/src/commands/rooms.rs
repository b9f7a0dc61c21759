//! Room command handlers.

use tabled::Tabled;
use wisersmart_core::{Hub, Room, is_valid_temperature};

use crate::cli::{GlobalOpts, RoomsArgs, RoomsCommand};
use crate::error::CliError;
use crate::output::{self, celsius};

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "Room")]
    name: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Target")]
    target: String,
}

impl From<&Room> for RoomRow {
    fn from(r: &Room) -> Self {
        Self {
            name: r.name.clone(),
            current: celsius(r.current_temperature),
            target: celsius(r.target_temperature),
        }
    }
}

fn detail(r: &Room) -> String {
    [
        format!("Room:    {}", r.name),
        format!("Current: {}", celsius(r.current_temperature)),
        format!("Target:  {}", celsius(r.target_temperature)),
    ]
    .join("\n")
}

pub async fn handle(hub: &Hub, args: RoomsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        RoomsCommand::List => {
            // Visible rooms, with temperatures where the hub reports them.
            let mut rooms = Vec::new();
            for name in hub.rooms().await? {
                let room = hub.room(&name).await?.unwrap_or(Room {
                    name,
                    current_temperature: None,
                    target_temperature: None,
                });
                rooms.push(room);
            }

            let out = output::render_list(&global.output, &rooms, |r| RoomRow::from(r), |r| {
                r.name.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RoomsCommand::Get { name } => {
            let room = hub
                .room(&name)
                .await?
                .ok_or_else(|| CliError::not_found("room", &name, "rooms list"))?;
            let out = output::render_single(&global.output, &room, detail, |r| {
                celsius(r.current_temperature)
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RoomsCommand::SetTemp { name, temperature } => {
            let sent = hub.set_room_temperature(&name, temperature).await?;
            if !global.quiet {
                if (sent - temperature).abs() < f64::EPSILON {
                    eprintln!("{name}: target set to {sent:.1}°C");
                } else if is_valid_temperature(temperature) {
                    // The off sentinel is accepted but clamps like any other value.
                    eprintln!("{name}: off is not supported, target set to {sent:.1}°C");
                } else {
                    eprintln!("{name}: {temperature}°C is out of range, target set to {sent:.1}°C");
                }
            }
            Ok(())
        }
    }
}
