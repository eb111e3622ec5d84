// src/controllers/osc.rs
//
// OSC remote control. Incoming messages are parsed into commands and
// queued; the app loop drains the queue once per frame and applies the
// reactivity triggers (theme, text, intensities, hover enable).

use nannou_osc as osc;
use std::error::Error;

use crate::models::ThemeMode;

#[derive(Debug)]
pub enum OscCommand {
    SetTheme(ThemeMode),
    ToggleTheme,
    SetText(String),
    SetIntensity {
        base: Option<f32>,
        hover: Option<f32>,
    },
    SetHoverEnabled(bool),
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match message.addr.as_str() {
                    "/theme" => match &message.args[..] {
                        [osc::Type::String(mode)] => match mode.as_str() {
                            "dark" => self.command_queue.push(OscCommand::SetTheme(ThemeMode::Dark)),
                            "light" => {
                                self.command_queue.push(OscCommand::SetTheme(ThemeMode::Light))
                            }
                            _ => println!("Unknown theme mode: {}", mode),
                        },
                        [] => self.command_queue.push(OscCommand::ToggleTheme),
                        _ => (),
                    },
                    "/text" => {
                        if let [osc::Type::String(content)] = &message.args[..] {
                            self.command_queue.push(OscCommand::SetText(content.clone()));
                        }
                    }
                    "/intensity" => {
                        let mut base = None;
                        let mut hover = None;

                        for (i, arg) in message.args.iter().enumerate() {
                            match (i, arg) {
                                (0, osc::Type::Float(b)) => base = Some(*b),
                                (1, osc::Type::Float(h)) => hover = Some(*h),
                                _ => (),
                            }
                        }

                        self.command_queue
                            .push(OscCommand::SetIntensity { base, hover });
                    }
                    "/hover" => {
                        if let [osc::Type::Int(enabled)] = &message.args[..] {
                            self.command_queue
                                .push(OscCommand::SetHoverEnabled(*enabled != 0));
                        }
                    }
                    _ => println!("Unknown OSC address pattern: {}", message.addr),
                };
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}
