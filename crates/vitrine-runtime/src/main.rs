// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Vitrine
// Prints the report built by `vitrine_core::make_message`.

use std::io::{self, Write};

use anyhow::{Context, Result};

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    // Diagnostics go to stderr; stdout carries only the report.
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let message = vitrine_core::make_message();
    log::debug!("Report built ({} bytes)", message.len());

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(message.as_bytes())
        .context("Failed to write report to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
