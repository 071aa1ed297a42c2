/// Attaches each item in order. If one fails, the items already attached are
/// detached again, newest first, before the error is returned.
pub fn attach_all<T, E>(
    items: &[T],
    mut attach: impl FnMut(&T) -> Result<(), E>,
    mut detach: impl FnMut(&T),
) -> Result<(), E> {
    for (attached, item) in items.iter().enumerate() {
        if let Err(e) = attach(item) {
            items[..attached].iter().rev().for_each(&mut detach);
            return Err(e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn everything_attaches_when_nothing_fails() {
        let log = RefCell::new(Vec::new());
        let result: Result<(), ()> = attach_all(
            &["resize", "mousemove"],
            |e| {
                log.borrow_mut().push(format!("+{e}"));
                Ok(())
            },
            |e| log.borrow_mut().push(format!("-{e}")),
        );
        assert!(result.is_ok());
        assert_eq!(*log.borrow(), ["+resize", "+mousemove"]);
    }

    #[test]
    fn a_failed_attach_rolls_back_the_earlier_ones() {
        let log = RefCell::new(Vec::new());
        let result = attach_all(
            &["resize", "mousemove"],
            |e| {
                if *e == "mousemove" {
                    return Err("refused");
                }
                log.borrow_mut().push(format!("+{e}"));
                Ok(())
            },
            |e| log.borrow_mut().push(format!("-{e}")),
        );
        assert_eq!(result, Err("refused"));
        assert_eq!(*log.borrow(), ["+resize", "-resize"]);
    }

    #[test]
    fn failing_first_detaches_nothing() {
        let detached = RefCell::new(0);
        let result = attach_all(&[1, 2], |_| Err(()), |_| *detached.borrow_mut() += 1);
        assert!(result.is_err());
        assert_eq!(*detached.borrow(), 0);
    }
}
