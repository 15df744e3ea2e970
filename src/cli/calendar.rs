//! Calendar CLI command
//!
//! Prints one month page of the trip calendar. The page defaults to the
//! current month; `--next`/`--prev` page forward and back from there.

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::display::format_month_view;
use crate::error::GlobeResult;
use crate::models::CalendarMonth;
use crate::services::CalendarService;

/// Calendar arguments
#[derive(Args, Debug, Default)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<CalendarMonth>,
    /// Page forward this many months
    #[arg(short, long, default_value_t = 0)]
    pub next: u32,
    /// Page back this many months
    #[arg(short, long, default_value_t = 0)]
    pub prev: u32,
}

impl CalendarArgs {
    fn offset(&self) -> i32 {
        let delta = i64::from(self.next) - i64::from(self.prev);
        delta.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

/// Handle the calendar command
pub fn handle_calendar_command(data: &Dataset, settings: &Settings, args: CalendarArgs) -> GlobeResult<()> {
    let service = CalendarService::new(settings);
    let month = service.resolve_month(args.month, args.offset());

    let view = service.month_view(month, &data.trips);
    print!("{}", format_month_view(&view, Some(Local::now().date_naive())));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let args = CalendarArgs {
            next: 3,
            prev: 5,
            ..CalendarArgs::default()
        };
        assert_eq!(args.offset(), -2);

        let far = CalendarArgs {
            next: u32::MAX,
            ..CalendarArgs::default()
        };
        assert_eq!(far.offset(), i32::MAX);
    }
}
