#[cfg(test)]
mod tests {
    use crate::logic::{
        compute_availability, submit_booking, subtract_booked_slots, BookingError, BookingRequest,
        RejectionKind,
    };
    use medibook_common::models::{AppointmentOption, Booking};
    use medibook_db::{
        BookingRepository, MemoryAppointmentOptionRepository, MemoryBookingRepository,
    };
    use std::sync::Arc;

    fn template(name: &str, price: i64, slots: &[&str]) -> AppointmentOption {
        AppointmentOption {
            id: None,
            name: name.to_string(),
            price,
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn booking(date: &str, treatment: &str, email: &str, slot: &str) -> Booking {
        Booking {
            id: None,
            appointment_date: date.to_string(),
            treatment: treatment.to_string(),
            slot: slot.to_string(),
            email: email.to_string(),
            patient_name: "Test Patient".to_string(),
        }
    }

    fn request(date: &str, treatment: &str, slot: &str, email: &str) -> BookingRequest {
        BookingRequest {
            appointment_date: date.to_string(),
            treatment: treatment.to_string(),
            slot: slot.to_string(),
            email: email.to_string(),
            patient_name: "Test Patient".to_string(),
        }
    }

    async fn seeded_repos(
        templates: Vec<AppointmentOption>,
    ) -> (
        Arc<MemoryAppointmentOptionRepository>,
        Arc<MemoryBookingRepository>,
    ) {
        use medibook_db::AppointmentOptionRepository;
        let options = Arc::new(MemoryAppointmentOptionRepository::new());
        for t in templates {
            options.insert(t).await.unwrap();
        }
        (options, Arc::new(MemoryBookingRepository::new()))
    }

    #[test]
    fn no_bookings_leaves_every_template_unchanged() {
        let templates = vec![
            template("Braces", 100, &["9am", "10am", "11am"]),
            template("Whitening", 60, &["9am", "1pm"]),
        ];
        let result = subtract_booked_slots(templates.clone(), &[]);

        assert_eq!(result.len(), 2);
        for (entry, original) in result.iter().zip(&templates) {
            assert_eq!(entry.name, original.name);
            assert_eq!(entry.price, original.price);
            assert_eq!(entry.slots, original.slots);
        }
    }

    #[test]
    fn booked_slot_is_removed_and_order_is_preserved() {
        let templates = vec![
            template("Braces", 100, &["9am", "10am", "11am", "2pm"]),
            template("Whitening", 60, &["9am", "10am"]),
        ];
        let booked = vec![booking("2024-01-10", "Braces", "a@x.com", "10am")];

        let result = subtract_booked_slots(templates, &booked);

        assert_eq!(result[0].slots, vec!["9am", "11am", "2pm"]);
        // Slots are only subtracted from the matching treatment, even when
        // another template offers the same label
        assert_eq!(result[1].slots, vec!["9am", "10am"]);
    }

    #[test]
    fn duplicate_bookings_of_one_slot_subtract_idempotently() {
        // Should not happen given the uniqueness invariant, but the
        // membership test must not care
        let templates = vec![template("Braces", 100, &["9am", "10am"])];
        let booked = vec![
            booking("2024-01-10", "Braces", "a@x.com", "10am"),
            booking("2024-01-10", "Braces", "b@x.com", "10am"),
        ];

        let result = subtract_booked_slots(templates, &booked);
        assert_eq!(result[0].slots, vec!["9am"]);
    }

    #[tokio::test]
    async fn availability_for_an_unknown_date_is_the_full_list() {
        let (options, bookings) =
            seeded_repos(vec![template("Braces", 100, &["9am", "10am", "11am"])]).await;
        bookings
            .insert(booking("2024-01-10", "Braces", "a@x.com", "10am"))
            .await
            .unwrap();

        // A date with no bookings, and the empty string a missing query
        // parameter collapses to, both match nothing
        for date in ["2024-02-02", ""] {
            let result = compute_availability(options.as_ref(), bookings.as_ref(), date)
                .await
                .unwrap();
            assert_eq!(result[0].slots, vec!["9am", "10am", "11am"]);
        }
    }

    #[tokio::test]
    async fn resubmitting_the_same_booking_is_rejected_once_stored() {
        let (options, bookings) =
            seeded_repos(vec![template("Braces", 100, &["9am", "10am", "11am"])]).await;

        let first = submit_booking(
            options.as_ref(),
            bookings.as_ref(),
            false,
            request("2024-01-10", "Braces", "10am", "a@x.com"),
        )
        .await
        .unwrap();
        assert!(first.accepted);
        assert!(first.booking_id.is_some());

        let second = submit_booking(
            options.as_ref(),
            bookings.as_ref(),
            false,
            request("2024-01-10", "Braces", "10am", "a@x.com"),
        )
        .await
        .unwrap();
        assert!(!second.accepted);
        assert_eq!(second.kind, Some(RejectionKind::DuplicateBooking));
        assert!(second.reason.unwrap().contains("2024-01-10"));

        // Exactly one record exists afterwards
        assert_eq!(bookings.find_by_date("2024-01-10").await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_identical_submissions_admit_exactly_one() {
        let (options, bookings) =
            seeded_repos(vec![template("Braces", 100, &["9am", "10am", "11am"])]).await;

        let mut handles = Vec::new();
        for _ in 0..16 {
            let options = Arc::clone(&options);
            let bookings = Arc::clone(&bookings);
            handles.push(tokio::spawn(async move {
                submit_booking(
                    options.as_ref(),
                    bookings.as_ref(),
                    false,
                    request("2024-01-10", "Braces", "10am", "a@x.com"),
                )
                .await
                .unwrap()
            }));
        }

        let mut accepted = 0;
        let mut rejected = 0;
        for handle in handles {
            let outcome = handle.await.unwrap();
            if outcome.accepted {
                accepted += 1;
            } else {
                rejected += 1;
                assert_eq!(outcome.kind, Some(RejectionKind::DuplicateBooking));
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(rejected, 15);
        assert_eq!(bookings.find_by_date("2024-01-10").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_required_fields_fail_validation() {
        let (options, bookings) = seeded_repos(vec![template("Braces", 100, &["9am"])]).await;

        for broken in [
            request("", "Braces", "9am", "a@x.com"),
            request("2024-01-10", "", "9am", "a@x.com"),
            request("2024-01-10", "Braces", "", "a@x.com"),
            request("2024-01-10", "Braces", "9am", ""),
        ] {
            let err = submit_booking(options.as_ref(), bookings.as_ref(), false, broken)
                .await
                .unwrap_err();
            assert!(matches!(err, BookingError::Validation(_)));
        }

        // Nothing was written
        assert!(bookings.find_by_date("2024-01-10").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn slot_policy_rejects_slots_no_longer_offered() {
        let (options, bookings) =
            seeded_repos(vec![template("Braces", 100, &["9am", "10am"])]).await;
        bookings
            .insert(booking("2024-01-10", "Braces", "b@x.com", "10am"))
            .await
            .unwrap();

        // With the policy off the independent checks admit the booking
        let lax = submit_booking(
            options.as_ref(),
            bookings.as_ref(),
            false,
            request("2024-01-10", "Braces", "10am", "a@x.com"),
        )
        .await
        .unwrap();
        assert!(lax.accepted);

        // With the policy on, a slot missing from the remaining list is
        // refused before admission
        let strict = submit_booking(
            options.as_ref(),
            bookings.as_ref(),
            true,
            request("2024-01-10", "Braces", "9am", "c@x.com"),
        )
        .await
        .unwrap();
        assert!(strict.accepted);

        let gone = submit_booking(
            options.as_ref(),
            bookings.as_ref(),
            true,
            request("2024-01-10", "Braces", "10am", "d@x.com"),
        )
        .await
        .unwrap();
        assert!(!gone.accepted);
        assert_eq!(gone.kind, Some(RejectionKind::SlotUnavailable));

        // An unknown treatment is also not offerable under the policy
        let unknown = submit_booking(
            options.as_ref(),
            bookings.as_ref(),
            true,
            request("2024-01-10", "Implants", "9am", "e@x.com"),
        )
        .await
        .unwrap();
        assert!(!unknown.accepted);
        assert_eq!(unknown.kind, Some(RejectionKind::SlotUnavailable));
    }
}
