/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Loads a raw memory image at address 0 and steps the processor until it
//! halts or faults.

use std::env;
use std::fs;
use std::process;

use anyhow::{bail, Context, Result};
use emu8080::cpu::{Cpu8080, DataBus};

/// No devices attached: IN reads zero and OUT is swallowed.
struct NullBus;

impl DataBus for NullBus {
    fn read_port(&self, _port: u8) -> u8 {
        0
    }

    fn write_port(&mut self, _port: u8, _value: u8) {}
}

fn main() -> Result<()> {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: run <image>"),
    };
    let image = fs::read(&path).with_context(|| format!("could not read {}", path))?;

    let mut cpu = Cpu8080::new(NullBus);
    cpu.load(&image);
    while !cpu.halted() {
        if let Err(fault) = cpu.step() {
            eprint!("{}", fault);
            process::exit(1);
        }
    }
    println!("halted after {} cycles", cpu.cycles());
    Ok(())
}
