use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem;

/// A single cell of the bucket array: an optionally-occupied slot plus the
/// cached full hash and probe distance of its occupant.
///
/// The slot is either a fully constructed value or nothing; the `Option` tag
/// is the occupancy marker. `hash` and `distance` are meaningful only while
/// the slot is occupied. When occupied, `distance` is the number of probe
/// steps the value sits past its ideal position.
struct Bucket<V> {
    slot: Option<V>,
    hash: u64,
    distance: usize,
}

impl<V> Bucket<V> {
    fn empty() -> Self {
        Bucket {
            slot: None,
            hash: 0,
            distance: 0,
        }
    }

    /// Places `value` into an empty bucket.
    fn fill(&mut self, value: V, hash: u64, distance: usize) {
        debug_assert!(self.slot.is_none());
        self.slot = Some(value);
        self.hash = hash;
        self.distance = distance;
    }

    /// Exchanges the bucket's contents with the caller-held candidate.
    ///
    /// Used during Robin Hood displacement: the caller swaps its candidate
    /// into a closer-to-ideal bucket and continues the probe walk carrying
    /// whatever the bucket previously held. Must only be called on an
    /// occupied bucket.
    fn exchange(&mut self, value: &mut V, hash: &mut u64, distance: &mut usize) {
        debug_assert!(self.slot.is_some());
        if let Some(slot) = self.slot.as_mut() {
            mem::swap(slot, value);
        }
        mem::swap(&mut self.hash, hash);
        mem::swap(&mut self.distance, distance);
    }
}

impl<V> Clone for Bucket<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        Bucket {
            slot: self.slot.clone(),
            hash: self.hash,
            distance: self.distance,
        }
    }
}

/// A hash table using Robin Hood hashing with backward-shift deletion.
///
/// `HashTable<V>` stores values of type `V` and provides insertion, lookup,
/// and removal. Unlike standard hash maps, this implementation requires you
/// to provide both the hash value and an equality predicate for each
/// operation.
///
/// The bucket array length is always a power of two (or zero before the
/// first insert). Every stored value records its probe distance from the
/// slot its hash maps to, and insertion keeps probe runs sorted by
/// non-decreasing distance: a probing candidate displaces any occupant that
/// sits closer to its own ideal slot. Lookups can therefore stop as soon as
/// they reach a bucket whose occupant is closer to home than the probe is
/// long. Removal shifts the following run back one slot instead of leaving
/// a tombstone, and the table rehashes to a smaller array once it drops
/// below a fifth of its capacity.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use robin_map::hash_table::Entry;
/// # use robin_map::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
/// #
/// #[derive(Debug, PartialEq)]
/// struct Person {
///     id: u64,
///     name: String,
/// }
///
/// let mut table = HashTable::with_capacity(100);
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
///
/// assert!(table.find(hash, |p| p.id == 123).is_some());
/// ```
pub struct HashTable<V> {
    buckets: Vec<Bucket<V>>,

    populated: usize,
    mask: usize,
    grow_at: usize,
    shrink_at: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::ToString;

        f.debug_struct("HashTable")
            .field("populated", &self.populated)
            .field("buckets", &self.buckets.len())
            .field("capacity", &self.grow_at)
            .field(
                "layout",
                &self
                    .buckets
                    .iter()
                    .map(|bucket| {
                        if bucket.slot.is_some() {
                            format!("d{:02}x{:02X}", bucket.distance, bucket.hash & 0xFF)
                        } else {
                            ".".to_string()
                        }
                    })
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<V> Clone for HashTable<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        HashTable {
            buckets: self.buckets.clone(),
            populated: self.populated,
            mask: self.mask,
            grow_at: self.grow_at,
            shrink_at: self.shrink_at,
        }
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<V> HashTable<V> {
    /// Creates a new hash table that can hold at least `capacity` values
    /// without resizing.
    ///
    /// The bucket array is sized to twice the next power of two at or above
    /// `capacity`, keeping at least half the array free as probing headroom.
    /// A capacity of zero allocates nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert!(table.capacity() >= 100);
    ///
    /// let empty: HashTable<String> = HashTable::with_capacity(0);
    /// assert_eq!(empty.bucket_count(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let bucket_count = Self::capacity_for(capacity);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Bucket::empty);

        let mut table = HashTable {
            buckets,
            populated: 0,
            mask: bucket_count.saturating_sub(1),
            grow_at: 0,
            shrink_at: 0,
        };
        table.update_thresholds();
        table
    }

    /// Returns the number of values in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no values.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of values the table can hold before resizing.
    pub fn capacity(&self) -> usize {
        self.grow_at
    }

    /// Returns the length of the bucket array, always zero or a power of
    /// two.
    ///
    /// Together with [`len`](Self::len) this exposes the table's current
    /// load factor.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Removes all values from the table and drops its storage.
    ///
    /// The table is returned to its freshly-constructed zero-capacity
    /// state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<u64> = HashTable::with_capacity(10);
    /// match table.entry(7, |&v| v == 7) {
    ///     robin_map::hash_table::Entry::Vacant(entry) => {
    ///         entry.insert(7);
    ///     }
    ///     _ => unreachable!(),
    /// }
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.buckets = Vec::new();
        self.populated = 0;
        self.mask = 0;
        self.update_thresholds();
    }

    /// Reserves room for at least `additional` more values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<u64> = HashTable::with_capacity(0);
    /// table.reserve(100);
    /// assert!(table.capacity() >= 100);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let required = Self::capacity_for(
            self.populated
                .checked_add(additional)
                .expect("allocation size overflow"),
        );
        if required > self.buckets.len() {
            self.rehash(required);
        }
    }

    /// Shrinks the bucket array to the smallest size that holds the current
    /// values within the load-factor bound.
    pub fn shrink_to_fit(&mut self) {
        let required = Self::capacity_for(self.populated);
        if required < self.buckets.len() {
            self.rehash(required);
        }
    }

    /// Gets the entry for a value matching `hash` and `eq`, for in-place
    /// inspection or insertion.
    ///
    /// An occupied entry never overwrites the stored value on its own;
    /// replacement is an explicit call on [`OccupiedEntry`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::hash_table::Entry;
    /// # use robin_map::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<(u64, &str)> = HashTable::with_capacity(0);
    ///
    /// match table.entry(42, |&(k, _)| k == 42) {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert((42, "answer"));
    ///     }
    ///     Entry::Occupied(_) => unreachable!(),
    /// }
    ///
    /// match table.entry(42, |&(k, _)| k == 42) {
    ///     Entry::Occupied(entry) => assert_eq!(entry.get().1, "answer"),
    ///     Entry::Vacant(_) => unreachable!(),
    /// }
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        if !self.is_empty() {
            let position = self.find_slot(hash, &eq);
            if self.is_match(position, hash, &eq) {
                return Entry::Occupied(OccupiedEntry {
                    table: self,
                    position,
                });
            }
        }
        Entry::Vacant(VacantEntry { table: self, hash })
    }

    /// Returns a reference to the value matching `hash` and `eq`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::hash_table::Entry;
    /// # use robin_map::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<u64> = HashTable::with_capacity(0);
    /// match table.entry(1, |&v| v == 10) {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert(10);
    ///     }
    ///     _ => unreachable!(),
    /// }
    ///
    /// assert_eq!(table.find(1, |&v| v == 10), Some(&10));
    /// assert_eq!(table.find(1, |&v| v == 11), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        if self.is_empty() {
            return None;
        }
        let position = self.find_slot(hash, &eq);
        if self.is_match(position, hash, &eq) {
            self.buckets[position].slot.as_ref()
        } else {
            None
        }
    }

    /// Returns a mutable reference to the value matching `hash` and `eq`,
    /// if any.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        if self.is_empty() {
            return None;
        }
        let position = self.find_slot(hash, &eq);
        if self.is_match(position, hash, &eq) {
            self.buckets[position].slot.as_mut()
        } else {
            None
        }
    }

    /// Removes and returns the value matching `hash` and `eq`, if any.
    ///
    /// Removing an absent value is a no-op. On a hit the following probe run
    /// is shifted back one slot to fill the hole, unless the table has
    /// dropped below a fifth of its capacity, in which case it rehashes into
    /// a smaller array instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_map::hash_table::Entry;
    /// # use robin_map::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<u64> = HashTable::with_capacity(0);
    /// match table.entry(1, |&v| v == 10) {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert(10);
    ///     }
    ///     _ => unreachable!(),
    /// }
    ///
    /// assert_eq!(table.remove(1, |&v| v == 10), Some(10));
    /// assert_eq!(table.remove(1, |&v| v == 10), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        if self.is_empty() {
            return None;
        }
        let position = self.find_slot(hash, &eq);
        if !self.is_match(position, hash, &eq) {
            return None;
        }
        Some(self.remove_at(position))
    }

    /// Returns an iterator over the values of the table, skipping empty
    /// buckets, in bucket-array order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
        }
    }

    /// Returns an iterator that removes and yields every value.
    ///
    /// The table is empty once the iterator is dropped; its bucket array is
    /// retained.
    pub fn drain(&mut self) -> Drain<'_, V> {
        self.populated = 0;
        Drain {
            buckets: self.buckets.iter_mut(),
        }
    }

    /// Returns the number of occupied buckets at each probe distance.
    ///
    /// Index `i` of the returned vector counts the values sitting `i` steps
    /// past their ideal slot. Robin Hood displacement keeps this
    /// distribution tight, which is observable here.
    pub fn probe_histogram(&self) -> Vec<usize> {
        let mut histogram = Vec::new();
        for bucket in &self.buckets {
            if bucket.slot.is_some() {
                if bucket.distance >= histogram.len() {
                    histogram.resize(bucket.distance + 1, 0);
                }
                histogram[bucket.distance] += 1;
            }
        }
        histogram
    }

    /// Bucket array size implied by holding `count` values: twice the next
    /// power of two at or above `count`, or zero for an empty table. The
    /// doubling keeps at least half the array free, bounding probe-run
    /// lengths.
    fn capacity_for(count: usize) -> usize {
        if count == 0 {
            0
        } else {
            count
                .checked_next_power_of_two()
                .and_then(|base| base.checked_mul(2))
                .expect("allocation size overflow")
        }
    }

    fn ideal_slot(&self, hash: u64) -> usize {
        hash as usize & self.mask
    }

    fn next_slot(&self, position: usize) -> usize {
        (position + 1) & self.mask
    }

    /// Steps from `from` to `to` along the circular probe sequence.
    fn slot_distance(&self, from: usize, to: usize) -> usize {
        to.wrapping_sub(from) & self.mask
    }

    fn update_thresholds(&mut self) {
        let capacity = self.buckets.len();
        // grow at ceil(0.8 * capacity), capped below the bucket count so a
        // probe walk always terminates at an empty bucket; shrink below
        // floor(0.2 * capacity).
        self.grow_at = usize::min(self.mask, ((capacity as u128 * 4).div_ceil(5)) as usize);
        self.shrink_at = capacity / 5;
    }

    /// Walks the probe sequence for `hash`, returning either the position of
    /// the matching value or the position where the walk stopped.
    ///
    /// The walk stops at the first empty bucket, or at the first occupant
    /// sitting strictly closer to its ideal slot than the probe is long:
    /// insertion keeps probe runs sorted by non-decreasing distance, so a
    /// matching value can never be stored past such a bucket. Callers
    /// distinguish hit from miss with [`is_match`](Self::is_match). Must not
    /// be called on a zero-capacity table.
    fn find_slot(&self, hash: u64, eq: &impl Fn(&V) -> bool) -> usize {
        let mut position = self.ideal_slot(hash);
        let mut distance = 0;
        loop {
            let bucket = &self.buckets[position];
            match bucket.slot.as_ref() {
                Some(value) if bucket.distance >= distance => {
                    if bucket.hash == hash && eq(value) {
                        return position;
                    }
                }
                _ => return position,
            }
            position = self.next_slot(position);
            distance += 1;
        }
    }

    /// Whether the bucket at `position` holds the value identified by `hash`
    /// and `eq`.
    fn is_match(&self, position: usize, hash: u64, eq: &impl Fn(&V) -> bool) -> bool {
        let bucket = &self.buckets[position];
        match bucket.slot.as_ref() {
            Some(value) => bucket.hash == hash && eq(value),
            None => false,
        }
    }

    /// Inserts `value` on the Robin Hood path and returns the position it
    /// landed at.
    ///
    /// The caller must have established that no equal value is present. The
    /// returned position is where the value sits at time of call; later
    /// mutations may relocate it.
    fn insert_value(&mut self, mut value: V, mut hash: u64) -> usize {
        if self.populated == self.grow_at {
            self.rehash(Self::capacity_for(self.populated + 1));
        }

        let mut position = self.ideal_slot(hash);
        let mut distance = 0;
        let mut first_swap = None;
        loop {
            let bucket = &mut self.buckets[position];
            if bucket.slot.is_none() {
                bucket.fill(value, hash, distance);
                self.populated += 1;
                debug_assert!(self.populated <= self.grow_at);
                return first_swap.unwrap_or(position);
            }
            if bucket.distance < distance {
                // The occupant is closer to home than we are; rob it and
                // carry it forward instead. The first swap is where the
                // original value ends up.
                bucket.exchange(&mut value, &mut hash, &mut distance);
                if first_swap.is_none() {
                    first_swap = Some(position);
                }
            }
            position = self.next_slot(position);
            distance += 1;
        }
    }

    /// Clears the bucket at `position` and restores the probe invariants,
    /// either by shrinking or by backward-shifting the following run.
    fn remove_at(&mut self, position: usize) -> V {
        let value = match self.buckets[position].slot.take() {
            Some(value) => value,
            None => unreachable!("remove_at called on an empty bucket"),
        };
        self.populated -= 1;

        if self.populated == 0 {
            // Nothing left to shift and nothing worth rehashing.
        } else if self.populated < self.shrink_at {
            // Rehashing reinserts every survivor from scratch, which
            // subsumes the backward shift.
            self.rehash(Self::capacity_for(self.populated));
        } else {
            self.backward_shift(position);
        }

        value
    }

    /// Moves each following occupant that is not already in its ideal slot
    /// back one step into the hole left by a removal, stopping at the first
    /// empty or zero-distance bucket. This preserves the non-decreasing
    /// distance invariant without tombstones.
    fn backward_shift(&mut self, mut hole: usize) {
        loop {
            let position = self.next_slot(hole);
            let bucket = &mut self.buckets[position];
            if bucket.distance == 0 {
                return;
            }
            let hash = bucket.hash;
            let Some(value) = bucket.slot.take() else {
                return;
            };

            let distance = self.slot_distance(self.ideal_slot(hash), hole);
            self.buckets[hole].fill(value, hash, distance);
            hole = position;
        }
    }

    /// Replaces the bucket array with a fresh all-empty one of
    /// `new_capacity` buckets and reinserts every live value through the
    /// normal insert path. Used for both growth and shrinking.
    fn rehash(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity == 0 || new_capacity.is_power_of_two());
        debug_assert!(new_capacity == 0 || self.populated < new_capacity);

        let mut fresh = Vec::with_capacity(new_capacity);
        fresh.resize_with(new_capacity, Bucket::empty);
        let old = mem::replace(&mut self.buckets, fresh);

        self.populated = 0;
        self.mask = new_capacity.saturating_sub(1);
        self.update_thresholds();

        for bucket in old {
            if let Some(value) = bucket.slot {
                self.insert_value(value, bucket.hash);
            }
        }
    }

    fn occupied(&self, position: usize) -> &V {
        match self.buckets[position].slot.as_ref() {
            Some(value) => value,
            None => unreachable!("bucket {position} is empty"),
        }
    }

    fn occupied_mut(&mut self, position: usize) -> &mut V {
        match self.buckets[position].slot.as_mut() {
            Some(value) => value,
            None => unreachable!("bucket {position} is empty"),
        }
    }

    /// Checks every structural invariant of the table.
    ///
    /// Test-only. Verifies the power-of-two bucket count, the load-factor
    /// bound, the per-bucket distance bookkeeping, and the Robin Hood run
    /// property (an occupant displaced `d > 0` steps always follows an
    /// occupant displaced at least `d - 1` steps).
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let capacity = self.buckets.len();
        assert!(capacity == 0 || capacity.is_power_of_two());
        assert!(self.populated <= self.grow_at || capacity == 0);

        let mut counted = 0;
        for (position, bucket) in self.buckets.iter().enumerate() {
            if bucket.slot.is_none() {
                continue;
            }
            counted += 1;

            let ideal = self.ideal_slot(bucket.hash);
            assert_eq!(
                self.slot_distance(ideal, position),
                bucket.distance,
                "stored distance disagrees with position for bucket {position}",
            );

            if bucket.distance > 0 {
                let previous = &self.buckets[position.wrapping_sub(1) & self.mask];
                assert!(
                    previous.slot.is_some(),
                    "displaced bucket {position} follows an empty bucket",
                );
                assert!(
                    previous.distance + 1 >= bucket.distance,
                    "probe run distances decreased at bucket {position}",
                );
            }
        }
        assert_eq!(counted, self.populated);
    }
}

impl<V> IntoIterator for HashTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = V;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buckets: self.buckets.into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type IntoIter = Iter<'a, V>;
    type Item = &'a V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A view into a single slot of the table, which may be vacant or occupied.
///
/// Constructed by the [`entry`](HashTable::entry) method.
pub enum Entry<'a, V> {
    /// No matching value is present.
    Vacant(VacantEntry<'a, V>),
    /// A matching value is present.
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from `default` if the entry is vacant and
    /// returns a mutable reference to the value.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }
}

/// A view into a vacant slot in a [`HashTable`].
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts a value into the table and returns a mutable reference to it.
    ///
    /// Growth happens before the probe positions are computed, so the
    /// returned reference always points into the current bucket array.
    pub fn insert(self, value: V) -> &'a mut V {
        let position = self.table.insert_value(value, self.hash);
        self.table.occupied_mut(position)
    }
}

/// A view into an occupied slot in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    position: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.table.occupied(self.position)
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.table.occupied_mut(self.position)
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        self.table.occupied_mut(self.position)
    }

    /// Replaces the value in the entry, returning the old value.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Removes the value from the table and returns it.
    pub fn remove(self) -> V {
        self.table.remove_at(self.position)
    }
}

/// An iterator over the values of a [`HashTable`].
///
/// Skips empty buckets lazily; exhausted iterators stay exhausted.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Bucket<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.buckets.find_map(|bucket| bucket.slot.as_ref())
    }
}

/// An owning iterator over the values of a [`HashTable`].
pub struct IntoIter<V> {
    buckets: alloc::vec::IntoIter<Bucket<V>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.buckets.find_map(|bucket| bucket.slot)
    }
}

/// A draining iterator over the values of a [`HashTable`].
///
/// Any values not yielded by the time the iterator is dropped are dropped
/// with it.
pub struct Drain<'a, V> {
    buckets: core::slice::IterMut<'a, Bucket<V>>,
}

impl<V> Drop for Drain<'_, V> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.buckets.find_map(|bucket| bucket.slot.take())
    }
}
