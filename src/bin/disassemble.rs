/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Prints an 8080 memory image as assembly, one instruction per line.

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use emu8080::opcode;

fn main() -> Result<()> {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: disassemble <image>"),
    };
    let image = fs::read(&path).with_context(|| format!("could not read {}", path))?;

    let mut pc = 0;
    while pc < image.len() {
        let meta = opcode::metadata(image[pc]);
        let size = meta.size as usize;
        if pc + size > image.len() {
            // Operand bytes run past the end of the image.
            println!("{:04X} {} <truncated>", pc, meta.mnemonic.trim_end());
            break;
        }
        match size {
            2 => println!("{:04X} {}#${:02x}", pc, meta.mnemonic, image[pc + 1]),
            3 => {
                let value = ((image[pc + 2] as u16) << 8) | image[pc + 1] as u16;
                if meta.op.operand_is_address() {
                    println!("{:04X} {}${:04x}", pc, meta.mnemonic, value);
                } else {
                    println!("{:04X} {}#${:04x}", pc, meta.mnemonic, value);
                }
            }
            _ => println!("{:04X} {}", pc, meta.mnemonic),
        }
        pc += size;
    }
    Ok(())
}
