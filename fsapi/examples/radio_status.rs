//! Print the state of a radio and follow its notifications
//!
//! Usage:
//!   FSAPI_URL=http://192.168.1.30/fsapi FSAPI_PIN=1234 \
//!     cargo run -p fsapi --example radio_status
//!
//! Without `FSAPI_URL` the first radio found by discovery is used.
//! Set `FSAPI_LOG_MODE=debug` to see the requests.

use fsapi::{discovery, logging, ClientConfig, FsClient, DEFAULT_PIN};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging_from_env()?;

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(_) => {
            let device = discovery::get()
                .into_iter()
                .next()
                .ok_or("no FSAPI radio found and FSAPI_URL is not set")?;
            println!("Using {} ({})", device, device.web_api_url);
            ClientConfig::for_device(&device, DEFAULT_PIN)
        }
    };

    let mut client = FsClient::from_config(&config)?;
    client.create_session()?;

    println!("Name:    {}", client.friendly_name()?);
    println!("Power:   {}", if client.power()? { "on" } else { "standby" });
    println!("Volume:  {}/{}", client.volume()?, client.volume_steps()?.saturating_sub(1));

    let mode = client.mode()?;
    for m in client.valid_modes()? {
        let marker = if m.key() as u32 == mode { "*" } else { " " };
        println!(" {} {:>2} {}", marker, m.key(), m);
    }

    if let Ok(name) = client.play_info_name() {
        println!("Playing: {} {}", name, client.play_info_text().unwrap_or_default());
    }

    for _ in 0..5 {
        match client.notifications() {
            Ok(batch) => {
                for n in batch {
                    println!("{} = {}", n.name, n.value);
                }
            }
            Err(e) if e.is_timeout() => println!("(no changes)"),
            Err(e) => return Err(e.into()),
        }
    }

    client.delete_session()?;
    Ok(())
}
