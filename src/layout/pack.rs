//! Siblings packing for disks, after Wang et al., "Visualization of large hierarchical data by
//! circle packing" (2006).
//!
//! Disks are placed one at a time tangent to a pair of disks on the *front-chain* (the cyclic
//! list of disks on the outer boundary). When the candidate intersects another chain disk, the
//! chain is cut at that disk and placement is retried. After each insertion the working pair
//! moves to the chain link whose weighted midpoint is closest to the origin, which keeps the
//! pack roughly round.
//!
//! The result is then centered on the smallest circle enclosing the front-chain. That circle is
//! found with Welzl's move-to-front algorithm over a shuffled copy; the shuffle uses a fixed-seed
//! LCG so identical input always produces identical output.

use crate::foundation::core::{Circle, Point};
use crate::foundation::error::{BannerError, BannerResult};

/// Result of [`pack_siblings`].
#[derive(Clone, Debug, PartialEq)]
pub struct Packing {
    /// One circle per input radius, in input order.
    pub circles: Vec<Circle>,
    /// Smallest circle enclosing the pack; `None` for empty input.
    pub enclosing: Option<Circle>,
}

#[derive(Clone, Copy, Debug)]
struct Disk {
    x: f64,
    y: f64,
    r: f64,
}

impl Disk {
    fn from_circle(c: &Circle) -> Self {
        Self {
            x: c.center.x,
            y: c.center.y,
            r: c.radius,
        }
    }

    fn to_circle(self) -> Circle {
        Circle::new(Point::new(self.x, self.y), self.r)
    }
}

/// Pack disks with the given radii so that none overlap.
///
/// Output order matches `radii`. Radii must be finite and positive.
#[tracing::instrument(skip(radii), fields(n = radii.len()))]
pub fn pack_siblings(radii: &[f64]) -> BannerResult<Packing> {
    if let Some((i, r)) = radii
        .iter()
        .enumerate()
        .find(|(_, r)| !r.is_finite() || **r <= 0.0)
    {
        return Err(BannerError::validation(format!(
            "disk {i} has invalid radius {r} (must be finite and > 0)"
        )));
    }

    let n = radii.len();
    let mut d: Vec<Disk> = radii
        .iter()
        .map(|&r| Disk { x: 0.0, y: 0.0, r })
        .collect();

    if n == 0 {
        return Ok(Packing {
            circles: Vec::new(),
            enclosing: None,
        });
    }

    if n == 1 {
        let c = d[0].to_circle();
        return Ok(Packing {
            circles: vec![c],
            enclosing: Some(c),
        });
    }

    d[0].x = -d[1].r;
    d[1].x = d[0].r;
    if n == 2 {
        let circles: Vec<Circle> = d.iter().map(|c| c.to_circle()).collect();
        let enclosing = enclose(&circles);
        return Ok(Packing { circles, enclosing });
    }

    let (x, y) = place(d[1], d[0], d[2].r);
    d[2].x = x;
    d[2].y = y;

    // Front-chain as an index-linked ring over `d`.
    let mut next = vec![0usize; n];
    let mut prev = vec![0usize; n];
    let (mut a, mut b) = (0usize, 1usize);
    next[0] = 1;
    next[1] = 2;
    next[2] = 0;
    prev[0] = 2;
    prev[1] = 0;
    prev[2] = 1;

    let mut i = 3;
    'pack: while i < n {
        let c = i;
        let (x, y) = place(d[a], d[b], d[c].r);
        d[c].x = x;
        d[c].y = y;

        // Nearest intersecting chain disk, by chain distance, alternating ahead of `b` and
        // behind `a`.
        let (mut j, mut k) = (next[b], prev[a]);
        let (mut sj, mut sk) = (d[b].r, d[a].r);
        loop {
            if sj <= sk {
                if intersects(d[j], d[c]) {
                    b = j;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sj += d[j].r;
                j = next[j];
            } else {
                if intersects(d[k], d[c]) {
                    a = k;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sk += d[k].r;
                k = prev[k];
            }
            if j == next[k] {
                break;
            }
        }

        prev[c] = a;
        next[c] = b;
        next[a] = c;
        prev[b] = c;
        b = c;

        let mut best = score(&d, &next, a);
        let mut cur = next[c];
        while cur != b {
            let s = score(&d, &next, cur);
            if s < best {
                a = cur;
                best = s;
            }
            cur = next[cur];
        }
        b = next[a];
        i += 1;
    }

    let mut chain = vec![d[b].to_circle()];
    let mut cur = next[b];
    while cur != b {
        chain.push(d[cur].to_circle());
        cur = next[cur];
    }
    tracing::trace!(front_chain = chain.len(), "packed");

    let enclosing = enclose(&chain);
    let circles = match enclosing {
        Some(e) => d
            .iter()
            .map(|c| Circle::new(Point::new(c.x - e.center.x, c.y - e.center.y), c.r))
            .collect(),
        None => d.iter().map(|c| c.to_circle()).collect(),
    };
    let enclosing = enclosing.map(|e| Circle::new(Point::ORIGIN, e.radius));
    Ok(Packing { circles, enclosing })
}

/// Position of a disk of radius `r` tangent to both `b` and `a`.
fn place(b: Disk, a: Disk, r: f64) -> (f64, f64) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d2 = dx * dx + dy * dy;
    if d2 == 0.0 {
        return (a.x + r, a.y);
    }

    let a2 = (a.r + r) * (a.r + r);
    let b2 = (b.r + r) * (b.r + r);
    if a2 > b2 {
        let x = (d2 + b2 - a2) / (2.0 * d2);
        let y = (b2 / d2 - x * x).max(0.0).sqrt();
        (b.x - x * dx - y * dy, b.y - x * dy + y * dx)
    } else {
        let x = (d2 + a2 - b2) / (2.0 * d2);
        let y = (a2 / d2 - x * x).max(0.0).sqrt();
        (a.x + x * dx - y * dy, a.y + x * dy + y * dx)
    }
}

fn intersects(a: Disk, b: Disk) -> bool {
    let dr = a.r + b.r - 1e-6;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

/// Squared distance from the origin to the radius-weighted midpoint of `node` and its successor.
fn score(d: &[Disk], next: &[usize], node: usize) -> f64 {
    let a = d[node];
    let b = d[next[node]];
    let ab = a.r + b.r;
    let dx = (a.x * b.r + b.x * a.r) / ab;
    let dy = (a.y * b.r + b.y * a.r) / ab;
    dx * dx + dy * dy
}

/// Deterministic LCG in `[0, 1)`; parameters from Numerical Recipes.
struct Lcg(u64);

impl Lcg {
    const A: u64 = 1_664_525;
    const C: u64 = 1_013_904_223;
    const M: u64 = 1 << 32;

    fn new() -> Self {
        Self(1)
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = (Self::A * self.0 + Self::C) % Self::M;
        self.0 as f64 / Self::M as f64
    }
}

fn shuffle(items: &mut [Disk], rng: &mut Lcg) {
    let mut m = items.len();
    while m > 0 {
        let i = (rng.next_f64() * m as f64) as usize;
        m -= 1;
        items.swap(m, i);
    }
}

/// Smallest circle enclosing every circle in `circles`; `None` when empty.
pub fn enclose(circles: &[Circle]) -> Option<Circle> {
    let mut items: Vec<Disk> = circles.iter().map(Disk::from_circle).collect();
    shuffle(&mut items, &mut Lcg::new());

    let mut basis: Vec<Disk> = Vec::new();
    let mut e: Option<Disk> = None;
    let mut i = 0;
    while i < items.len() {
        let p = items[i];
        if let Some(cur) = e
            && encloses_weak(cur, p)
        {
            i += 1;
            continue;
        }
        let Some(extended) = extend_basis(&basis, p) else {
            tracing::warn!("enclosing circle basis could not be extended; result is approximate");
            break;
        };
        basis = extended;
        e = Some(enclose_basis(&basis));
        i = 0;
    }
    e.map(Disk::to_circle)
}

fn extend_basis(basis: &[Disk], p: Disk) -> Option<Vec<Disk>> {
    if encloses_weak_all(p, basis) {
        return Some(vec![p]);
    }

    for &bi in basis {
        if encloses_not(p, bi) && encloses_weak_all(enclose_basis2(bi, p), basis) {
            return Some(vec![bi, p]);
        }
    }

    for (i, &bi) in basis.iter().enumerate() {
        for &bj in &basis[i + 1..] {
            if encloses_not(enclose_basis2(bi, bj), p)
                && encloses_not(enclose_basis2(bi, p), bj)
                && encloses_not(enclose_basis2(bj, p), bi)
                && encloses_weak_all(enclose_basis3(bi, bj, p), basis)
            {
                return Some(vec![bi, bj, p]);
            }
        }
    }

    None
}

fn encloses_not(a: Disk, b: Disk) -> bool {
    let dr = a.r - b.r;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr < 0.0 || dr * dr < dx * dx + dy * dy
}

fn encloses_weak(a: Disk, b: Disk) -> bool {
    let dr = a.r - b.r + a.r.max(b.r).max(1.0) * 1e-9;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

fn encloses_weak_all(a: Disk, basis: &[Disk]) -> bool {
    basis.iter().all(|&b| encloses_weak(a, b))
}

fn enclose_basis(basis: &[Disk]) -> Disk {
    match basis {
        [a] => *a,
        [a, b] => enclose_basis2(*a, *b),
        [a, b, c] => enclose_basis3(*a, *b, *c),
        _ => unreachable!("basis holds one to three disks"),
    }
}

fn enclose_basis2(a: Disk, b: Disk) -> Disk {
    let x21 = b.x - a.x;
    let y21 = b.y - a.y;
    let r21 = b.r - a.r;
    let l = (x21 * x21 + y21 * y21).sqrt();
    Disk {
        x: (a.x + b.x + x21 / l * r21) / 2.0,
        y: (a.y + b.y + y21 / l * r21) / 2.0,
        r: (l + a.r + b.r) / 2.0,
    }
}

fn enclose_basis3(a: Disk, b: Disk, c: Disk) -> Disk {
    let (x1, y1, r1) = (a.x, a.y, a.r);
    let a2 = x1 - b.x;
    let a3 = x1 - c.x;
    let b2 = y1 - b.y;
    let b3 = y1 - c.y;
    let c2 = b.r - r1;
    let c3 = c.r - r1;
    let d1 = x1 * x1 + y1 * y1 - r1 * r1;
    let d2 = d1 - b.x * b.x - b.y * b.y + b.r * b.r;
    let d3 = d1 - c.x * c.x - c.y * c.y + c.r * c.r;
    let ab = a3 * b2 - a2 * b3;
    let xa = (b2 * d3 - b3 * d2) / (ab * 2.0) - x1;
    let xb = (b3 * c2 - b2 * c3) / ab;
    let ya = (a3 * d2 - a2 * d3) / (ab * 2.0) - y1;
    let yb = (a2 * c3 - a3 * c2) / ab;
    let qa = xb * xb + yb * yb - 1.0;
    let qb = 2.0 * (r1 + xa * xb + ya * yb);
    let qc = xa * xa + ya * ya - r1 * r1;
    let r = -(if qa.abs() > 1e-6 {
        (qb + (qb * qb - 4.0 * qa * qc).sqrt()) / (2.0 * qa)
    } else {
        qc / qb
    });
    Disk {
        x: x1 + xa + xb * r,
        y: y1 + ya + yb * r,
        r,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pack.rs"]
mod tests;
