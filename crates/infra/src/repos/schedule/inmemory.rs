use super::IScheduleRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use renta_worker_domain::{ReminderSchedule, ID};

pub struct InMemoryScheduleRepo {
    schedules: std::sync::Mutex<Vec<ReminderSchedule>>,
}

impl InMemoryScheduleRepo {
    pub fn new() -> Self {
        Self {
            schedules: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IScheduleRepo for InMemoryScheduleRepo {
    async fn insert(&self, schedule: &ReminderSchedule) -> anyhow::Result<()> {
        insert(schedule, &self.schedules);
        Ok(())
    }

    async fn save(&self, schedule: &ReminderSchedule) -> anyhow::Result<()> {
        save(schedule, &self.schedules);
        Ok(())
    }

    async fn find(&self, schedule_id: &ID) -> anyhow::Result<Option<ReminderSchedule>> {
        Ok(find(schedule_id, &self.schedules))
    }

    async fn find_due(&self, date: NaiveDate) -> anyhow::Result<Vec<ReminderSchedule>> {
        Ok(find_by(&self.schedules, |s| {
            s.active && s.next_reminder_date == date
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Datelike;
    use renta_worker_domain::Entity;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn schedule(next_reminder_date: NaiveDate, active: bool) -> ReminderSchedule {
        let mut schedule = ReminderSchedule::new(
            ID::new(),
            ID::new(),
            next_reminder_date,
            next_reminder_date.day(),
            10000,
            "Rent is due".into(),
        );
        schedule.active = active;
        schedule
    }

    #[tokio::test]
    async fn it_selects_only_active_schedules_due_on_the_date() {
        let repo = InMemoryScheduleRepo::new();
        let today = date(2026, 8, 10);

        let due = schedule(today, true);
        let inactive = schedule(today, false);
        let future = schedule(date(2026, 9, 10), true);

        for s in [&due, &inactive, &future] {
            repo.insert(s).await.unwrap();
        }

        let found = repo.find_due(today).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), due.id());
    }
}
