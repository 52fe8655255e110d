use crate::array_util::align_to_u32a_be;
use crate::sha1::backend::BlockTransform;
use crate::sha1::rounds::{choose, expand_schedule_staged, majority, parity, K0, K1, K2, K3};
use crate::sha1::{Block, ChainingState, Workspace, BLOCK_LENGTH_DOUBLE_WORDS};

/// Expands the schedule up front, then runs all 80 rounds without a loop. Instead of shifting the working registers
/// after every round, the registers are renamed: the new ``a`` is written into the variable that held ``e``.
pub struct Unrolled;

macro_rules! step {
    ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $k:expr, $w:ident, $i:expr) => {
        $e = $e
            .wrapping_add($a.rotate_left(5))
            .wrapping_add($f($b, $c, $d))
            .wrapping_add($k)
            .wrapping_add($w[$i]);
        $b = $b.rotate_left(30);
    };
}

/// five rounds, after which the register names line up again
macro_rules! rounds5 {
    ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $k:expr, $w:ident, $i:expr) => {
        step!($a, $b, $c, $d, $e, $f, $k, $w, $i);
        step!($e, $a, $b, $c, $d, $f, $k, $w, $i + 1);
        step!($d, $e, $a, $b, $c, $f, $k, $w, $i + 2);
        step!($c, $d, $e, $a, $b, $f, $k, $w, $i + 3);
        step!($b, $c, $d, $e, $a, $f, $k, $w, $i + 4);
    };
}

impl BlockTransform for Unrolled {
    const NAME: &'static str = "unrolled";

    #[allow(clippy::many_single_char_names)]
    fn transform(state: &mut ChainingState, block: &Block, workspace: &mut Workspace) {
        align_to_u32a_be(&mut workspace[..BLOCK_LENGTH_DOUBLE_WORDS], block);
        expand_schedule_staged(workspace);

        let w = workspace;
        let [mut a, mut b, mut c, mut d, mut e] = *state;

        rounds5!(a, b, c, d, e, choose, K0, w, 0);
        rounds5!(a, b, c, d, e, choose, K0, w, 5);
        rounds5!(a, b, c, d, e, choose, K0, w, 10);
        rounds5!(a, b, c, d, e, choose, K0, w, 15);

        rounds5!(a, b, c, d, e, parity, K1, w, 20);
        rounds5!(a, b, c, d, e, parity, K1, w, 25);
        rounds5!(a, b, c, d, e, parity, K1, w, 30);
        rounds5!(a, b, c, d, e, parity, K1, w, 35);

        rounds5!(a, b, c, d, e, majority, K2, w, 40);
        rounds5!(a, b, c, d, e, majority, K2, w, 45);
        rounds5!(a, b, c, d, e, majority, K2, w, 50);
        rounds5!(a, b, c, d, e, majority, K2, w, 55);

        rounds5!(a, b, c, d, e, parity, K3, w, 60);
        rounds5!(a, b, c, d, e, parity, K3, w, 65);
        rounds5!(a, b, c, d, e, parity, K3, w, 70);
        rounds5!(a, b, c, d, e, parity, K3, w, 75);

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
    }
}
