// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod pipeline;
mod queue;
mod reports;
mod scheduling;
