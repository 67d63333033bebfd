use itoa::Buffer;

use crate::collider::Outcome;

pub fn write_numbers(buf: &mut String, itoa_buf: &mut Buffer, numbers: &[u32]) {
    for (i, n) in numbers.iter().enumerate() {
        if i > 0 {
            buf.push(' ');
        }
        buf.push_str(itoa_buf.format(*n));
    }
}

pub fn write_outcome(msg_buf: &mut String, itoa_buf: &mut Buffer, outcome: &Outcome) {
    msg_buf.clear();
    match outcome {
        Outcome::Collision { draw, draws } => {
            // 1 2 3 4 5 6 at 13983816 draws.
            write_numbers(msg_buf, itoa_buf, draw.as_slice());
            msg_buf.push_str(" at ");
            msg_buf.push_str(itoa_buf.format(*draws));
            msg_buf.push_str(" draws.");
        }
        Outcome::Exhausted { draws } => {
            // no collision after 1000 draws.
            msg_buf.push_str("no collision after ");
            msg_buf.push_str(itoa_buf.format(*draws));
            msg_buf.push_str(" draws.");
        }
    }
    msg_buf.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Draw;

    #[test]
    fn collision_line() {
        let mut buf = String::new();
        let mut itoa_buf = Buffer::new();
        let outcome = Outcome::Collision {
            draw: Draw::from_values([6, 5, 4, 3, 2, 1]),
            draws: 13_983_816,
        };
        write_outcome(&mut buf, &mut itoa_buf, &outcome);
        assert_eq!(buf, "1 2 3 4 5 6 at 13983816 draws.\n");
    }

    #[test]
    fn exhausted_line() {
        let mut buf = String::from("stale");
        let mut itoa_buf = Buffer::new();
        write_outcome(&mut buf, &mut itoa_buf, &Outcome::Exhausted { draws: 500 });
        assert_eq!(buf, "no collision after 500 draws.\n");
    }

    #[test]
    fn single_number() {
        let mut buf = String::new();
        let mut itoa_buf = Buffer::new();
        write_numbers(&mut buf, &mut itoa_buf, &[42]);
        assert_eq!(buf, "42");
    }
}
