use super::{Person, Student, StudentAdapter, UniversityStudent};
use crate::error::PatternError;
use crate::framework::{DemoReport, PatternDemo, PatternKind};
use async_trait::async_trait;
use tracing::info;

/// Lists a native student and an adapted registry record through the same interface.
#[derive(Debug, Clone, Default)]
pub struct AdapterDemo {
    reference_year: Option<i32>,
}

impl AdapterDemo {
    pub fn new(reference_year: Option<i32>) -> Self {
        Self { reference_year }
    }

    fn describe(student: &dyn Student, report: &mut DemoReport) -> Result<(), PatternError> {
        report.line(format!(
            "{} | age {} | contact {}",
            student.full_name(),
            student.age()?,
            student.contact_number()
        ));
        Ok(())
    }

    fn walkthrough(&self) -> Result<DemoReport, PatternError> {
        let mut report = DemoReport::new(PatternKind::Adapter);

        let enrolled = UniversityStudent::new("Sunil Fernando", 22, 712345678);
        let person = Person::new("200012345678", "Kamal", "Perera", "2000-05-14", 771234567);
        let mut adapted = StudentAdapter::new(person);
        if let Some(year) = self.reference_year {
            adapted = adapted.with_reference_year(year);
        }
        info!(nic = adapted.person().nic(), "Adapting person record");

        let students: [&dyn Student; 2] = [&enrolled, &adapted];
        for student in students {
            Self::describe(student, &mut report)?;
        }
        Ok(report)
    }
}

#[async_trait]
impl PatternDemo for AdapterDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Adapter
    }

    async fn run(&self) -> Result<DemoReport, PatternError> {
        self.walkthrough()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn adapted_person_reads_like_a_student() {
        let report = AdapterDemo::new(Some(2024)).run().await.unwrap();
        assert_eq!(
            report.lines,
            vec![
                "Sunil Fernando | age 22 | contact 712345678".to_string(),
                "Kamal Perera | age 24 | contact 771234567".to_string(),
            ]
        );
    }
}
