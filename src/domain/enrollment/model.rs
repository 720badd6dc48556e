//! Enrollment domain entity

/// One student taking one course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enrollment {
    pub enrollment_id: i32,
    pub student_id: i32,
    pub course_id: i32,
}

/// Drop repeated course ids, keeping first-seen order.
pub fn normalize_course_ids(course_ids: &[i32]) -> Vec<i32> {
    let mut seen = Vec::with_capacity(course_ids.len());
    for id in course_ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_first_occurrence_order() {
        assert_eq!(normalize_course_ids(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(normalize_course_ids(&[]).is_empty());
    }
}
