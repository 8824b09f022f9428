use ndarray::{s, Array2, ArrayView1};
use rand::Rng;
use std::fmt;
use Side::{Down, Left, Right, Up};

/// Chance that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Down,
    Left,
    Up,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Up, Down, Left, Right];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        };
        write!(f, "{}", s)
    }
}

/// Opaque tile identity. Kept while a tile slides, issued anew on merge and
/// spawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TileId(u64);

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct IdSeq(u64);

impl IdSeq {
    fn issue(&mut self) -> TileId {
        let id = TileId(self.0);
        self.0 += 1;
        id
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Tile {
    id: TileId,
    level: u32,
    row: usize,
    col: usize,
    is_new: bool,
    is_merged: bool,
}

impl From<Tile> for u64 {
    fn from(tile: Tile) -> u64 {
        1 << tile.level
    }
}

impl Tile {
    // Position is filled in by `Field::placed`.
    fn fresh(id: TileId, level: u32) -> Self {
        Self {
            id,
            level,
            row: 0,
            col: 0,
            is_new: false,
            is_merged: false,
        }
    }
    fn hold(self) -> Self {
        Self {
            is_new: false,
            is_merged: false,
            ..self
        }
    }
    pub fn id(&self) -> TileId {
        self.id
    }
    pub fn value(&self) -> u64 {
        u64::from(*self)
    }
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    /// Set only on the turn the tile was spawned.
    pub fn is_new(&self) -> bool {
        self.is_new
    }
    /// Set only on the turn the tile absorbed another one.
    pub fn is_merged(&self) -> bool {
        self.is_merged
    }
}

/// Slides the tiles of `line` toward its start and merges equal neighbours,
/// each tile at most once. Returns the new line (same length) and the sum of
/// the merged values.
fn merge_line(line: ArrayView1<Option<Tile>>, ids: &mut IdSeq) -> (Vec<Option<Tile>>, u64) {
    let slid: Vec<Tile> = line.iter().flatten().copied().collect();
    let mut result = Vec::with_capacity(line.len());
    let mut score = 0;
    let mut i = 0;
    while i < slid.len() {
        match slid.get(i + 1) {
            Some(next) if next.level == slid[i].level => {
                let level = slid[i].level + 1;
                assert!(level < u64::BITS, "merged tile value overflows u64");
                let merged = Tile {
                    is_merged: true,
                    ..Tile::fresh(ids.issue(), level)
                };
                score += merged.value();
                result.push(Some(merged));
                i += 2;
            }
            _ => {
                result.push(Some(slid[i].hold()));
                i += 1;
            }
        }
    }
    result.resize(line.len(), None);
    (result, score)
}

/// Outcome of a swipe: the resulting field, points scored by merges and
/// whether any cell changed its occupancy or value.
#[derive(Clone, Debug, PartialEq)]
pub struct Swipe {
    pub field: Field,
    pub score: u64,
    pub moved: bool,
}

/// Square grid of optional tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    cells: Array2<Option<Tile>>,
    ids: IdSeq,
}

impl Field {
    /// Creates an empty `size`x`size` field. Panics on zero size.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "field size must be positive");
        Self {
            cells: Array2::default((size, size)),
            ids: IdSeq::default(),
        }
    }

    /// Builds a field from tile values, 0 meaning an empty cell.
    pub fn from_array(array: Array2<u64>) -> Self {
        let (h, w) = array.dim();
        assert_eq!(h, w, "field must be square, got {}x{}", h, w);
        let mut field = Self::new(h);
        for (index, &v) in array.indexed_iter() {
            let cell = match v {
                0 => None,
                v if v >= 2 && v.is_power_of_two() => {
                    Some(Tile::fresh(field.ids.issue(), v.trailing_zeros()))
                }
                _ => panic!("Expected values 0,2,4,8,16..., got {}", v),
            };
            field.cells[index] = cell;
        }
        Self::placed(field.cells, field.ids)
    }

    pub fn to_array(&self) -> Array2<u64> {
        self.cells.map(|cell| cell.map_or(0, u64::from))
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get((row, col)).copied().flatten()
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Empty cells as `(row, col)`, row-major.
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// Sum of all tile values.
    pub fn total(&self) -> u64 {
        self.tiles().map(|tile| tile.value()).sum()
    }

    pub fn max_value(&self) -> u64 {
        self.tiles().map(|tile| tile.value()).max().unwrap_or(0)
    }

    fn placed(mut cells: Array2<Option<Tile>>, ids: IdSeq) -> Self {
        for ((row, col), cell) in cells.indexed_iter_mut() {
            if let Some(tile) = cell {
                tile.row = row;
                tile.col = col;
            }
        }
        Self { cells, ids }
    }

    /// Swaps rows and columns. Its own inverse.
    pub fn transposed(&self) -> Self {
        Self::placed(self.cells.t().to_owned(), self.ids)
    }

    /// Mirrors every row left to right. Its own inverse.
    pub fn reversed_rows(&self) -> Self {
        Self::placed(self.cells.slice(s![.., ..;-1]).to_owned(), self.ids)
    }

    fn merge_rows(&self) -> (Self, u64) {
        let mut ids = self.ids;
        let mut cells: Array2<Option<Tile>> = Array2::default(self.cells.raw_dim());
        let mut score = 0;
        for (src, mut dst) in self.cells.rows().into_iter().zip(cells.rows_mut()) {
            let (line, gained) = merge_line(src, &mut ids);
            for (slot, tile) in dst.iter_mut().zip(line) {
                *slot = tile;
            }
            score += gained;
        }
        (Self::placed(cells, ids), score)
    }

    fn merge_rows_toward_end(&self) -> (Self, u64) {
        let (field, score) = self.reversed_rows().merge_rows();
        (field.reversed_rows(), score)
    }

    /// Slides and merges all tiles toward `side`. The field itself is left
    /// untouched.
    pub fn swipe(&self, side: Side) -> Swipe {
        let (field, score) = match side {
            Left => self.merge_rows(),
            Right => self.merge_rows_toward_end(),
            Up => {
                let (field, score) = self.transposed().merge_rows();
                (field.transposed(), score)
            }
            Down => {
                let (field, score) = self.transposed().merge_rows_toward_end();
                (field.transposed(), score)
            }
        };
        let moved = field.to_array() != self.to_array();
        Swipe {
            field,
            score,
            moved,
        }
    }

    /// Puts one tile into a uniformly chosen empty cell: a 4 with
    /// `four_probability`, otherwise a 2. Returns false on a full field.
    pub fn append_tile<R: Rng + ?Sized>(&mut self, rng: &mut R, four_probability: f64) -> bool {
        let poses = self.free_cells();
        if poses.is_empty() {
            return false;
        }
        let (row, col) = poses[rng.gen_range(0..poses.len())];
        let level = if rng.gen_bool(four_probability) { 2 } else { 1 };
        self.cells[(row, col)] = Some(Tile {
            row,
            col,
            is_new: true,
            ..Tile::fresh(self.ids.issue(), level)
        });
        true
    }

    /// `append_tile` with the standard 2/4 odds, on a copy. Callers with
    /// configured odds use `append_tile` directly.
    pub fn with_random_tile<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut field = self.clone();
        field.append_tile(rng, FOUR_PROBABILITY);
        field
    }

    /// True while some swipe can still change the field.
    pub fn has_legal_move(&self) -> bool {
        let n = self.size();
        let same = |row: usize, col: usize, level: u32| {
            self.get(row, col).map_or(false, |tile| tile.level == level)
        };
        self.cells
            .indexed_iter()
            .any(|((row, col), cell)| match cell {
                None => true,
                Some(tile) => {
                    (col + 1 < n && same(row, col + 1, tile.level))
                        || (row + 1 < n && same(row + 1, col, tile.level))
                }
            })
    }

    pub fn has_reached(&self, threshold: u64) -> bool {
        self.tiles().any(|tile| tile.value() >= threshold)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{:>6}", tile.value())?,
                    None => write!(f, "{:>6}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[test]
fn merge_line_pair() {
    use crate::field::tests::merged_values;
    assert_eq!(merged_values(&[2, 2, 0, 0]), (vec![4, 0, 0, 0], 4));
    assert_eq!(merged_values(&[0, 0, 8, 8]), (vec![16, 0, 0, 0], 16));
}

#[test]
fn merge_line_triple_merges_leading_pair_only() {
    use crate::field::tests::merged_values;
    assert_eq!(merged_values(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4));
    assert_eq!(merged_values(&[2, 0, 2, 2]), (vec![4, 2, 0, 0], 4));
    assert_eq!(merged_values(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
}

#[test]
fn merge_line_does_not_chain_merges() {
    use crate::field::tests::merged_values;
    assert_eq!(merged_values(&[4, 2, 2, 0]), (vec![4, 4, 0, 0], 4));
}

#[test]
fn merge_line_empty_and_distinct() {
    use crate::field::tests::merged_values;
    assert_eq!(merged_values(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0));
    assert_eq!(merged_values(&[0, 2, 0, 4]), (vec![2, 4, 0, 0], 0));
    assert_eq!(merged_values(&[2, 4, 8, 16]), (vec![2, 4, 8, 16], 0));
}

#[test]
fn merge_line_ids_and_flags() {
    use crate::field::tests::line;
    let (tiles, mut ids) = line(&[0, 2, 2, 4]);
    let (result, _) = merge_line(ndarray::arr1(&tiles).view(), &mut ids);
    let merged = result[0].unwrap();
    let slid = result[1].unwrap();
    assert!(merged.is_merged());
    assert!(tiles.iter().flatten().all(|t| t.id() != merged.id()));
    assert!(!slid.is_merged());
    assert_eq!(slid.id(), tiles[3].unwrap().id());
    assert_eq!(result[2], None);
    assert_eq!(result[3], None);
}

#[test]
fn field_from_array() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[[8, 4, 2], [4, 2, 0], [2, 0, 16]]));
    assert_eq!(field.size(), 3);
    assert_eq!(field.get(0, 0).unwrap().value(), 8);
    assert_eq!(field.get(2, 2).unwrap().value(), 16);
    assert_eq!(field.get(1, 2), None);
    assert_eq!(field.get(3, 0), None);
    for tile in field.tiles() {
        assert_eq!(field.get(tile.row(), tile.col()), Some(tile));
        assert!(!tile.is_new());
        assert!(!tile.is_merged());
    }
    assert_eq!(field.free_cells(), vec![(1, 2), (2, 1)]);
    assert_eq!(field.total(), 38);
    assert_eq!(field.max_value(), 16);
}

#[test]
fn field_into_array() {
    use ndarray::arr2;
    let array = arr2(&[[8, 4, 2, 0], [4, 2, 0, 0], [2, 0, 0, 0], [0, 0, 0, 16]]);
    assert_eq!(Field::from_array(array.clone()).to_array(), array);
}

#[test]
#[should_panic(expected = "Expected values")]
fn field_from_array_rejects_non_power_of_two() {
    Field::from_array(ndarray::arr2(&[[3, 0], [0, 0]]));
}

#[test]
#[should_panic(expected = "must be square")]
fn field_from_array_rejects_non_square() {
    Field::from_array(ndarray::arr2(&[[2, 0, 0], [0, 0, 0]]));
}

#[test]
#[should_panic(expected = "must be positive")]
fn field_new_rejects_zero_size() {
    Field::new(0);
}

#[test]
fn transpose_and_reverse_keep_ids() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[[2, 4, 0], [0, 8, 0], [16, 0, 32]]));
    let transposed = field.transposed();
    assert_eq!(
        transposed.to_array(),
        arr2(&[[2, 0, 16], [4, 8, 0], [0, 0, 32]])
    );
    assert_eq!(transposed.get(1, 0).unwrap().id(), field.get(0, 1).unwrap().id());
    assert_eq!(transposed.transposed(), field);

    let reversed = field.reversed_rows();
    assert_eq!(
        reversed.to_array(),
        arr2(&[[0, 4, 2], [0, 8, 0], [32, 0, 16]])
    );
    assert_eq!(reversed.get(0, 2).unwrap().id(), field.get(0, 0).unwrap().id());
    for tile in reversed.tiles() {
        assert_eq!(reversed.get(tile.row(), tile.col()), Some(tile));
    }
    assert_eq!(reversed.reversed_rows(), field);
}

#[test]
fn swipe_up() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[
        [0, 2, 4, 4],
        [0, 2, 2, 4],
        [0, 0, 2, 2],
        [0, 0, 0, 2],
    ]));
    let swipe = field.swipe(Up);
    assert_eq!(
        swipe.field.to_array(),
        arr2(&[
            [0, 4, 4, 8],
            [0, 0, 4, 4],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
    );
    assert_eq!(swipe.score, 4 + 4 + 8 + 4);
    assert!(swipe.moved);
    let merged = |row, col| swipe.field.get(row, col).unwrap().is_merged();
    assert!(merged(0, 1));
    assert!(!merged(0, 2));
    assert!(merged(0, 3));
    assert!(merged(1, 2));
    assert!(merged(1, 3));
    assert_eq!(
        swipe.field.get(0, 2).unwrap().id(),
        field.get(0, 2).unwrap().id()
    );
}

#[test]
fn swipe_down() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[
        [0, 2, 4, 4],
        [0, 2, 2, 4],
        [0, 0, 2, 2],
        [0, 0, 0, 2],
    ]));
    let swipe = field.swipe(Down);
    assert_eq!(
        swipe.field.to_array(),
        arr2(&[
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 4, 8],
            [0, 4, 4, 4],
        ])
    );
    assert_eq!(swipe.score, 4 + 4 + 8 + 4);
}

#[test]
fn swipe_left() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[
        [0, 2, 4, 4],
        [0, 2, 2, 4],
        [0, 0, 2, 2],
        [0, 0, 0, 2],
    ]));
    let swipe = field.swipe(Left);
    assert_eq!(
        swipe.field.to_array(),
        arr2(&[
            [2, 8, 0, 0],
            [4, 4, 0, 0],
            [4, 0, 0, 0],
            [2, 0, 0, 0],
        ])
    );
    assert_eq!(swipe.score, 8 + 4 + 4);
}

#[test]
fn swipe_right() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[
        [0, 2, 4, 4],
        [0, 2, 2, 4],
        [0, 0, 2, 2],
        [0, 0, 0, 2],
    ]));
    let swipe = field.swipe(Right);
    assert_eq!(
        swipe.field.to_array(),
        arr2(&[
            [0, 0, 2, 8],
            [0, 0, 4, 4],
            [0, 0, 0, 4],
            [0, 0, 0, 2],
        ])
    );
    assert_eq!(swipe.score, 8 + 4 + 4);
}

#[test]
fn swipe_single_row_scenarios() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[
        [2, 2, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]));
    let swipe = field.swipe(Left);
    assert_eq!(swipe.field.to_array().row(0).to_vec(), vec![4, 0, 0, 0]);
    assert_eq!(swipe.score, 4);
    assert!(swipe.moved);

    let field = Field::from_array(arr2(&[
        [2, 0, 2, 2],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]));
    let swipe = field.swipe(Left);
    assert_eq!(swipe.field.to_array().row(0).to_vec(), vec![4, 2, 0, 0]);
    assert_eq!(swipe.score, 4);
}

#[test]
fn swipe_slide_without_merge_counts_as_moved() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[[0, 2, 4], [0, 0, 0], [0, 0, 0]]));
    let swipe = field.swipe(Left);
    assert!(swipe.moved);
    assert_eq!(swipe.score, 0);
    assert_eq!(swipe.field.get(0, 0).unwrap().id(), field.get(0, 1).unwrap().id());

    let blocked = field.swipe(Right);
    assert!(!blocked.moved);
    assert_eq!(blocked.field.to_array(), field.to_array());
}

#[test]
fn swipe_empty_field_is_noop() {
    let field = Field::new(4);
    for &side in Side::ALL.iter() {
        let swipe = field.swipe(side);
        assert!(!swipe.moved);
        assert_eq!(swipe.score, 0);
        assert_eq!(swipe.field, field);
    }
}

#[test]
fn swipe_clears_new_flags() {
    use rand::{rngs::StdRng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = Field::new(4);
    field.append_tile(&mut rng, FOUR_PROBABILITY);
    assert!(field.tiles().all(|t| t.is_new()));
    for &side in Side::ALL.iter() {
        let swipe = field.swipe(side);
        assert!(swipe.field.tiles().all(|t| !t.is_new() && !t.is_merged()));
    }
}

#[test]
fn append_tile_fills_one_cell() {
    use rand::{rngs::StdRng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(42);
    let mut field = Field::new(4);
    assert!(field.append_tile(&mut rng, FOUR_PROBABILITY));
    assert_eq!(field.tiles().count(), 1);
    let tile = field.tiles().next().unwrap();
    assert!(tile.is_new());
    assert!(tile.value() == 2 || tile.value() == 4);
    assert_eq!(field.get(tile.row(), tile.col()), Some(tile));

    let next = field.with_random_tile(&mut rng);
    assert_eq!(next.tiles().count(), 2);
    assert_eq!(field.tiles().count(), 1);
    let ids: Vec<_> = next.tiles().map(|t| t.id()).collect();
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn append_tile_is_reproducible() {
    use rand::{rngs::StdRng, SeedableRng};
    let spawn = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = Field::new(4);
        for _ in 0..5 {
            field.append_tile(&mut rng, FOUR_PROBABILITY);
        }
        field
    };
    assert_eq!(spawn(3), spawn(3));
}

#[test]
fn append_tile_on_full_field_is_noop() {
    use ndarray::arr2;
    use rand::{rngs::StdRng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = Field::from_array(arr2(&[[2, 4], [4, 2]]));
    let before = field.clone();
    assert!(!field.append_tile(&mut rng, FOUR_PROBABILITY));
    assert_eq!(field, before);
}

#[test]
fn append_tile_value_odds() {
    use rand::{rngs::StdRng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(2048);
    let mut fours = 0;
    for _ in 0..2000 {
        let mut field = Field::new(2);
        field.append_tile(&mut rng, FOUR_PROBABILITY);
        if field.max_value() == 4 {
            fours += 1;
        }
    }
    assert!(fours > 120 && fours < 280, "fours = {}", fours);

    let mut field = Field::new(3);
    for _ in 0..9 {
        field.append_tile(&mut rng, 1.0);
    }
    assert!(field.tiles().all(|t| t.value() == 4));
}

#[test]
fn legal_move_detection() {
    use ndarray::arr2;
    assert!(Field::new(4).has_legal_move());
    assert!(Field::from_array(arr2(&[[2, 4], [4, 0]])).has_legal_move());
    assert!(!Field::from_array(arr2(&[[2, 4], [4, 2]])).has_legal_move());
    assert!(Field::from_array(arr2(&[[2, 2], [4, 8]])).has_legal_move());
    assert!(Field::from_array(arr2(&[[2, 4], [2, 8]])).has_legal_move());
    assert!(!Field::from_array(arr2(&[
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]))
    .has_legal_move());
    assert!(Field::from_array(arr2(&[
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 4],
    ]))
    .has_legal_move());
}

#[test]
fn win_detection() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[[1024, 0], [0, 0]]));
    assert!(!field.has_reached(2048));
    assert!(field.has_reached(1024));
    assert!(Field::from_array(arr2(&[[4096, 0], [0, 0]])).has_reached(2048));
    assert!(!Field::new(4).has_reached(2));
}

#[test]
fn second_swipe_can_merge_again() {
    use ndarray::arr2;
    let once = Field::from_array(arr2(&[[2, 2, 4], [0, 0, 0], [0, 0, 0]])).swipe(Left);
    assert_eq!(once.field.to_array().row(0).to_vec(), vec![4, 4, 0]);
    assert_eq!(once.score, 4);
    let twice = once.field.swipe(Left);
    assert!(twice.moved);
    assert_eq!(twice.score, 8);
    assert_eq!(twice.field.to_array().row(0).to_vec(), vec![8, 0, 0]);
    assert!(!twice.field.swipe(Left).moved);
}

#[test]
fn merge_keeps_total_value() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[[2, 2, 4], [8, 8, 8], [0, 16, 16]]));
    let swipe = field.swipe(Left);
    assert_eq!(swipe.field.total(), field.total());
    assert_eq!(swipe.score, 4 + 16 + 32);
}

#[test]
fn merge_past_u32_range() {
    use ndarray::arr2;
    let big = 1u64 << 31;
    let swipe = Field::from_array(arr2(&[[big, big], [0, 0]])).swipe(Left);
    assert_eq!(swipe.field.to_array(), arr2(&[[1 << 32, 0], [0, 0]]));
    assert_eq!(swipe.score, 1 << 32);
    assert!(swipe.field.has_reached(1 << 32));
}

#[test]
#[should_panic(expected = "overflows u64")]
fn merge_beyond_u64_panics() {
    let top = 1u64 << 63;
    Field::from_array(ndarray::arr2(&[[top, top], [0, 0]])).swipe(Left);
}

#[test]
fn field_display() {
    use ndarray::arr2;
    let field = Field::from_array(arr2(&[[2, 0], [0, 2048]]));
    assert_eq!(field.to_string(), "     2     .\n     .  2048\n");
}
