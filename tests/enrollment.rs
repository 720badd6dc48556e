mod common;

use common::{course, setup, student};
use roster::domain::{DomainError, NewStudent};

#[tokio::test]
async fn enroll_then_withdraw_leaves_student_without_courses() {
    let t = setup().await;
    let ann = student(&t, "R1", "Ann").await;
    let algebra = course(&t, "C1", "Algebra").await;

    let enrollment = t.service.enroll(ann.student_id, algebra.course_id).await.unwrap();
    assert_eq!(enrollment.student_id, ann.student_id);
    assert_eq!(enrollment.course_id, algebra.course_id);
    assert_eq!(
        t.service.list_by_student(ann.student_id).await.unwrap(),
        vec![enrollment]
    );

    t.service.withdraw(ann.student_id, algebra.course_id).await.unwrap();
    assert!(t.service.list_by_student(ann.student_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn enrolling_twice_keeps_one_row() {
    let t = setup().await;
    let ann = student(&t, "R1", "Ann").await;
    let algebra = course(&t, "C1", "Algebra").await;

    t.service.enroll(ann.student_id, algebra.course_id).await.unwrap();
    let err = t
        .service
        .enroll(ann.student_id, algebra.course_id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AlreadyEnrolled { .. }));

    assert_eq!(t.service.list_by_course(algebra.course_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn withdrawing_twice_reports_not_enrolled() {
    let t = setup().await;
    let ann = student(&t, "R1", "Ann").await;
    let algebra = course(&t, "C1", "Algebra").await;

    t.service.enroll(ann.student_id, algebra.course_id).await.unwrap();
    t.service.withdraw(ann.student_id, algebra.course_id).await.unwrap();

    let err = t
        .service
        .withdraw(ann.student_id, algebra.course_id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotEnrolled { .. }));
}

#[tokio::test]
async fn unknown_endpoints_are_not_found() {
    let t = setup().await;
    let ann = student(&t, "R1", "Ann").await;
    let algebra = course(&t, "C1", "Algebra").await;

    assert!(matches!(
        t.service.enroll(999, algebra.course_id).await,
        Err(DomainError::NotFound { entity: "Student", .. })
    ));
    assert!(matches!(
        t.service.enroll(ann.student_id, 999).await,
        Err(DomainError::NotFound { entity: "Course", .. })
    ));
    assert!(matches!(
        t.service.withdraw(ann.student_id, 999).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        t.service.list_by_student(999).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        t.service.list_by_course(999).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn repository_rejects_dangling_links() {
    let t = setup().await;
    let ann = student(&t, "R1", "Ann").await;

    let err = t
        .repos
        .enrollments()
        .create(ann.student_id, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Course", .. }));
}

#[tokio::test]
async fn both_sides_of_the_relation_are_listed() {
    let t = setup().await;
    let ann = student(&t, "R1", "Ann").await;
    let bob = student(&t, "R2", "Bob").await;
    let algebra = course(&t, "C1", "Algebra").await;
    let geometry = course(&t, "C2", "Geometry").await;

    t.service.enroll(ann.student_id, geometry.course_id).await.unwrap();
    t.service.enroll(ann.student_id, algebra.course_id).await.unwrap();
    t.service.enroll(bob.student_id, algebra.course_id).await.unwrap();

    let courses = t.service.courses_of_student(ann.student_id).await.unwrap();
    assert_eq!(courses, vec![geometry.clone(), algebra.clone()]);

    let students = t.service.students_of_course(algebra.course_id).await.unwrap();
    assert_eq!(students, vec![ann, bob]);

    assert!(t
        .service
        .students_of_course(geometry.course_id)
        .await
        .unwrap()
        .iter()
        .all(|s| s.roll_number == "R1"));
}

#[tokio::test]
async fn register_student_with_courses() {
    let t = setup().await;
    let algebra = course(&t, "C1", "Algebra").await;
    let geometry = course(&t, "C2", "Geometry").await;

    let (ann, enrollments) = t
        .service
        .register_student(
            NewStudent::new("R1", "Ann"),
            &[algebra.course_id, geometry.course_id, algebra.course_id],
        )
        .await
        .unwrap();

    assert_eq!(enrollments.len(), 2);
    assert!(enrollments.iter().all(|e| e.student_id == ann.student_id));
}

#[tokio::test]
async fn register_student_with_unknown_course_stores_nothing() {
    let t = setup().await;
    let algebra = course(&t, "C1", "Algebra").await;

    let err = t
        .service
        .register_student(NewStudent::new("R1", "Ann"), &[algebra.course_id, 999])
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    assert!(t.repos.students().find_all().await.unwrap().is_empty());
    assert!(t.repos.enrollments().list_by_course(algebra.course_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn set_courses_replaces_the_whole_set() {
    let t = setup().await;
    let ann = student(&t, "R1", "Ann").await;
    let algebra = course(&t, "C1", "Algebra").await;
    let geometry = course(&t, "C2", "Geometry").await;
    let physics = course(&t, "C3", "Physics").await;

    t.service.enroll(ann.student_id, algebra.course_id).await.unwrap();
    t.service.enroll(ann.student_id, geometry.course_id).await.unwrap();

    let enrollments = t
        .service
        .set_courses(ann.student_id, &[geometry.course_id, physics.course_id])
        .await
        .unwrap();
    let ids: Vec<i32> = enrollments.iter().map(|e| e.course_id).collect();
    assert_eq!(ids, vec![geometry.course_id, physics.course_id]);

    let courses = t.service.courses_of_student(ann.student_id).await.unwrap();
    assert_eq!(courses, vec![geometry, physics]);
}

#[tokio::test]
async fn set_courses_with_unknown_course_keeps_old_set() {
    let t = setup().await;
    let ann = student(&t, "R1", "Ann").await;
    let algebra = course(&t, "C1", "Algebra").await;
    t.service.enroll(ann.student_id, algebra.course_id).await.unwrap();

    let err = t
        .service
        .set_courses(ann.student_id, &[999])
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let courses = t.service.courses_of_student(ann.student_id).await.unwrap();
    assert_eq!(courses, vec![algebra]);
}

#[tokio::test]
async fn set_courses_to_empty_clears_enrollments() {
    let t = setup().await;
    let ann = student(&t, "R1", "Ann").await;
    let algebra = course(&t, "C1", "Algebra").await;
    t.service.enroll(ann.student_id, algebra.course_id).await.unwrap();

    let enrollments = t.service.set_courses(ann.student_id, &[]).await.unwrap();
    assert!(enrollments.is_empty());
    assert!(t.service.list_by_student(ann.student_id).await.unwrap().is_empty());
}
